use super::*;

fn dictionary() -> SynonymDictionary {
    SynonymDictionary::from_pairs([("jeju", "제주"), ("new york", "뉴욕")])
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(standardize(&dictionary(), ""), "");
}

#[test]
fn lookup_is_trimmed_and_case_folded() {
    assert_eq!(standardize(&dictionary(), "  JeJu "), "제주");
    assert_eq!(standardize(&dictionary(), "New York"), "뉴욕");
}

#[test]
fn unmapped_input_keeps_original_casing() {
    assert_eq!(standardize(&dictionary(), "Lombok"), "Lombok");
    assert_eq!(standardize(&dictionary(), " Lombok "), " Lombok ");
}

#[test]
fn dictionary_round_trip() {
    let dictionary = SynonymDictionary::builtin();
    for entry in dictionary.iter() {
        assert_eq!(standardize(&dictionary, &entry.key), entry.localized);
        assert_eq!(
            find_canonical_key(&dictionary, &entry.localized),
            Some(entry.key.as_str()),
            "localized name {} should map back to {}",
            entry.localized,
            entry.key
        );
    }
}

#[test]
fn canonical_key_miss() {
    assert_eq!(find_canonical_key(&dictionary(), "한라산"), None);
}

#[test]
fn strips_korean_suffix() {
    assert_eq!(strip_descriptive_suffix("한라산").as_deref(), Some("한라"));
    assert_eq!(strip_descriptive_suffix("파미르 고원").as_deref(), Some("파미르"));
}

#[test]
fn strips_english_suffix() {
    assert_eq!(strip_descriptive_suffix("Jeju Island").as_deref(), Some("Jeju"));
    assert_eq!(
        strip_descriptive_suffix("Tibetan Plateau").as_deref(),
        Some("Tibetan")
    );
}

#[test]
fn list_order_decides_between_matching_suffixes() {
    assert_eq!(strip_descriptive_suffix("산섬").as_deref(), Some("산"));
    // "해변" is listed after "산" but only "해변" matches here.
    assert_eq!(strip_descriptive_suffix("해운대해변").as_deref(), Some("해운대"));
}

#[test]
fn strips_only_one_suffix() {
    assert_eq!(strip_descriptive_suffix("설악산시").as_deref(), Some("설악산"));
}

#[test]
fn no_suffix_means_no_retry() {
    assert_eq!(strip_descriptive_suffix("Lombok"), None);
    assert_eq!(strip_descriptive_suffix(""), None);
}

#[test]
fn suffix_only_query_is_not_stripped_to_nothing() {
    assert_eq!(strip_descriptive_suffix("산"), None);
    assert_eq!(strip_descriptive_suffix(" Island"), None);
}

#[test]
fn suffix_match_is_case_sensitive() {
    assert_eq!(strip_descriptive_suffix("Jeju island"), None);
}
