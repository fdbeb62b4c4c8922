use std::path::Path;

use super::*;

#[test]
fn parse_keeps_entry_order() {
    let yaml = r"
synonyms:
  - key: jeju
    localized: 제주
  - key: seoul
    localized: 서울
";
    let file = parse_synonyms(yaml).expect("parse");
    assert_eq!(file.synonyms.len(), 2);
    assert_eq!(file.synonyms[0].key, "jeju");
    assert_eq!(file.synonyms[1].localized, "서울");
}

#[test]
fn parse_lowercases_and_trims_keys() {
    let yaml = r"
synonyms:
  - key: '  New York '
    localized: ' 뉴욕 '
";
    let file = parse_synonyms(yaml).expect("parse");
    assert_eq!(file.synonyms[0].key, "new york");
    assert_eq!(file.synonyms[0].localized, "뉴욕");
}

#[test]
fn parse_rejects_duplicate_keys_case_insensitively() {
    let yaml = r"
synonyms:
  - key: Paris
    localized: 파리
  - key: paris
    localized: 빠리
";
    let err = parse_synonyms(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate synonym key")),
        "got: {err:?}"
    );
}

#[test]
fn parse_rejects_empty_key() {
    let yaml = r"
synonyms:
  - key: '   '
    localized: 파리
";
    let err = parse_synonyms(yaml).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn parse_rejects_empty_localized_name() {
    let yaml = r"
synonyms:
  - key: paris
    localized: ''
";
    let err = parse_synonyms(yaml).unwrap_err();
    assert!(err.to_string().contains("empty localized name"));
}

#[test]
fn parse_rejects_malformed_yaml() {
    let err = parse_synonyms("synonyms: [key: 1").unwrap_err();
    assert!(matches!(err, ConfigError::SynonymsFileParse(_)));
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load_synonyms(Path::new("/definitely/not/here/synonyms.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::SynonymsFileIo { .. }));
}

#[test]
fn load_synonyms_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("synonyms.yaml");
    assert!(
        path.exists(),
        "synonyms.yaml missing at {path:?}, required for this test"
    );
    let file = load_synonyms(&path).expect("failed to load synonyms.yaml");
    assert!(
        !file.synonyms.is_empty(),
        "synonyms.yaml should contain at least one entry"
    );
    assert!(file
        .synonyms
        .iter()
        .any(|s| s.key == "jeju" && s.localized == "제주"));
}
