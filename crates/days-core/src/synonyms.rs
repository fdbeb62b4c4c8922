//! On-disk synonym dictionary file.
//!
//! Maps a canonical English key to the localized place name users type.
//! Entry order is significant: reverse lookups return the first entry whose
//! localized name matches, so the file order is kept as written.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymConfig {
    pub key: String,
    pub localized: String,
}

#[derive(Debug, Deserialize)]
pub struct SynonymsFile {
    pub synonyms: Vec<SynonymConfig>,
}

/// Load and validate a synonym dictionary from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_synonyms(path: &Path) -> Result<SynonymsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SynonymsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_synonyms(&content)
}

/// Parse and validate synonym YAML already in memory.
///
/// Keys are trimmed and lower-cased; localized names are trimmed but keep
/// their case.
///
/// # Errors
///
/// Returns [`ConfigError::SynonymsFileParse`] for malformed YAML and
/// [`ConfigError::Validation`] for empty or duplicate keys.
pub fn parse_synonyms(content: &str) -> Result<SynonymsFile, ConfigError> {
    let mut file: SynonymsFile = serde_yaml::from_str(content)?;

    for entry in &mut file.synonyms {
        entry.key = entry.key.trim().to_lowercase();
        entry.localized = entry.localized.trim().to_string();
    }

    validate_synonyms(&file)?;

    Ok(file)
}

fn validate_synonyms(file: &SynonymsFile) -> Result<(), ConfigError> {
    let mut seen_keys = HashSet::new();

    for entry in &file.synonyms {
        if entry.key.is_empty() {
            return Err(ConfigError::Validation(
                "synonym key must be non-empty".to_string(),
            ));
        }

        if entry.localized.is_empty() {
            return Err(ConfigError::Validation(format!(
                "synonym '{}' has an empty localized name",
                entry.key
            )));
        }

        if !seen_keys.insert(entry.key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate synonym key: '{}'",
                entry.key
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "synonyms_test.rs"]
mod tests;
