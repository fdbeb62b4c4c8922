//! Command handlers for the CLI.
//!
//! Results are written to stdout as pretty JSON. A miss or an unreachable
//! geocoder becomes an `anyhow` error so the process exits non-zero.

use std::sync::Arc;

use days_core::AppConfig;
use days_geocode::{GeocodeClient, GeocodeSettings, Resolution, SynonymDictionary};

/// Builds the dictionary from `DAYS_SYNONYMS_PATH` when set, otherwise the
/// built-in table.
pub(crate) fn load_dictionary(config: &AppConfig) -> anyhow::Result<Arc<SynonymDictionary>> {
    let dictionary = match &config.synonyms_path {
        Some(path) => {
            let file = days_core::load_synonyms(path)?;
            tracing::debug!(path = %path.display(), entries = file.synonyms.len(), "loaded synonyms file");
            SynonymDictionary::from_config(&file)
        }
        None => SynonymDictionary::builtin(),
    };
    Ok(Arc::new(dictionary))
}

fn build_client(
    config: &AppConfig,
    dictionary: Arc<SynonymDictionary>,
) -> anyhow::Result<GeocodeClient> {
    GeocodeClient::new(&GeocodeSettings::from_app_config(config), dictionary)
        .map_err(|e| anyhow::anyhow!("failed to build geocode client: {e}"))
}

pub(crate) async fn run_forward(
    config: &AppConfig,
    dictionary: Arc<SynonymDictionary>,
    query: &str,
) -> anyhow::Result<()> {
    let client = build_client(config, dictionary)?;
    let location = found_or_bail(client.resolve_forward(query).await, || {
        format!("no location found for '{query}'")
    })?;
    println!("{}", serde_json::to_string_pretty(&location)?);
    Ok(())
}

pub(crate) async fn run_reverse(
    config: &AppConfig,
    dictionary: Arc<SynonymDictionary>,
    lat: f64,
    lng: f64,
) -> anyhow::Result<()> {
    let client = build_client(config, dictionary)?;
    let address = found_or_bail(client.resolve_reverse(lat, lng).await, || {
        format!("no address found for {lat},{lng}")
    })?;
    println!("{}", serde_json::to_string_pretty(&address)?);
    Ok(())
}

pub(crate) fn print_synonyms(dictionary: &SynonymDictionary) -> anyhow::Result<()> {
    let entries: Vec<serde_json::Value> = dictionary
        .iter()
        .map(|entry| serde_json::json!({ "key": entry.key, "localized": entry.localized }))
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn found_or_bail<T>(
    resolution: Resolution<T>,
    miss_message: impl FnOnce() -> String,
) -> anyhow::Result<T> {
    match resolution {
        Resolution::Found(value) => Ok(value),
        Resolution::Miss => Err(anyhow::anyhow!(miss_message())),
        Resolution::TransientFailure => {
            anyhow::bail!("geocoder unavailable after retries; try again later")
        }
    }
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
