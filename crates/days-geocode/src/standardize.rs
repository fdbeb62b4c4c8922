//! Query normalization shared by the forward and reverse paths.

use crate::dictionary::SynonymDictionary;

/// Descriptive trailing tokens removed by the second forward pass, in
/// priority order. Only the first entry the query ends with is stripped.
pub const DESCRIPTIVE_SUFFIXES: &[&str] = &[
    "고원",
    "섬",
    "산",
    "해변",
    "폭포",
    "마을",
    "대륙",
    "반도",
    "시",
    "군",
    "구",
    " Plateau",
    " Island",
    " Mountain",
    " Beach",
    " Falls",
    " Village",
    " Peninsula",
];

/// Substitutes a dictionary synonym for `raw`.
///
/// The lookup key is the trimmed, lower-cased input. Without a match the
/// input is returned untouched, original casing and whitespace included.
#[must_use]
pub fn standardize(dictionary: &SynonymDictionary, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let key = raw.trim().to_lowercase();
    match dictionary.get(&key) {
        Some(mapped) => mapped.to_owned(),
        None => raw.to_owned(),
    }
}

/// Reverse dictionary lookup: localized name → canonical key.
#[must_use]
pub fn find_canonical_key<'a>(dictionary: &'a SynonymDictionary, name: &str) -> Option<&'a str> {
    dictionary.key_for(name)
}

/// Removes the first matching descriptive suffix.
///
/// Returns `None` when no suffix matches or when nothing would be left to
/// search for.
#[must_use]
pub fn strip_descriptive_suffix(query: &str) -> Option<String> {
    let suffix = DESCRIPTIVE_SUFFIXES
        .iter()
        .find(|suffix| query.ends_with(**suffix))?;
    let stripped = query[..query.len() - suffix.len()].trim();
    if stripped.is_empty() || stripped == query {
        return None;
    }
    Some(stripped.to_owned())
}

#[cfg(test)]
#[path = "standardize_test.rs"]
mod tests;
