//! Wire shapes returned by the search service and the canonical records
//! projected from them.
//!
//! Upstream records are untrusted: every field is optional or defaulted so a
//! partially-present candidate still deserializes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Address breakdown attached to a candidate when `addressdetails=1` is sent
/// (forward) or always (reverse). Non-string values read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressParts {
    #[serde(default, deserialize_with = "lenient_name")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub town: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub village: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub municipality: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub island: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub country: Option<String>,
}

/// One entry of the forward search response array.
///
/// Coordinates usually arrive as decimal text (`"37.5665"`); bare numbers
/// are accepted too. Any object decodes, whatever its field types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "lenient_text")]
    pub lat: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub lon: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: String,
    #[serde(default, deserialize_with = "lenient_address")]
    pub address: Option<AddressParts>,
}

impl Candidate {
    /// Decodes one response array entry. Entries that are not objects
    /// become an empty candidate so the entry keeps its rank.
    #[must_use]
    pub fn from_entry(entry: Value) -> Self {
        if entry.is_object() {
            serde_json::from_value(entry).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

/// The reverse endpoint's response object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReversePlace {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: String,
    #[serde(default, deserialize_with = "lenient_address")]
    pub address: Option<AddressParts>,
}

/// Strings pass through, numbers keep their decimal text, anything else is
/// empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_address<'de, D>(deserializer: D) -> Result<Option<AddressParts>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => serde_json::from_value(object).ok(),
        _ => None,
    })
}

/// Canonical output of forward resolution.
///
/// `name` is never empty. `country` is an empty string when the upstream
/// did not report one. Malformed coordinate text yields `NaN` in `lat`/`lng`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub country: String,
    pub display_name: String,
}

/// Output of reverse resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseAddress {
    pub full_address: String,
    /// City-level name, else the country, else empty.
    pub city: String,
    pub country: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
