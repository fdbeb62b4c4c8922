use super::*;

use std::path::PathBuf;

fn config_with_synonyms(path: Option<PathBuf>) -> AppConfig {
    AppConfig {
        log_level: "info".to_owned(),
        search_url: "http://127.0.0.1:1/search".to_owned(),
        reverse_url: "http://127.0.0.1:1/reverse".to_owned(),
        user_agent: "days-test/0.1".to_owned(),
        request_timeout_secs: None,
        max_attempts: 1,
        retry_backoff_ms: 0,
        synonyms_path: path,
    }
}

#[test]
fn found_passes_value_through() {
    let value = found_or_bail(Resolution::Found(7), || "unused".to_owned()).unwrap();
    assert_eq!(value, 7);
}

#[test]
fn miss_uses_caller_message() {
    let err = found_or_bail(Resolution::<i32>::Miss, || "no location found for 'x'".to_owned())
        .unwrap_err();
    assert_eq!(err.to_string(), "no location found for 'x'");
}

#[test]
fn transient_failure_is_distinct_from_miss() {
    let err = found_or_bail(Resolution::<i32>::TransientFailure, || "miss".to_owned()).unwrap_err();
    assert!(err.to_string().contains("unavailable"), "got: {err}");
}

#[test]
fn dictionary_defaults_to_builtin() {
    let dictionary = load_dictionary(&config_with_synonyms(None)).unwrap();
    assert_eq!(dictionary.get("jeju"), Some("제주"));
}

#[test]
fn dictionary_loads_shipped_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/synonyms.yaml");
    let dictionary = load_dictionary(&config_with_synonyms(Some(path))).unwrap();
    assert_eq!(dictionary.get("seoul"), Some("서울"));
    assert_eq!(dictionary.key_for("제주"), Some("jeju"));
}

#[test]
fn missing_synonyms_file_is_an_error() {
    let path = PathBuf::from("/nonexistent/days/synonyms.yaml");
    assert!(load_dictionary(&config_with_synonyms(Some(path))).is_err());
}

#[tokio::test]
async fn unreachable_geocoder_fails_forward() {
    let config = config_with_synonyms(None);
    let dictionary = load_dictionary(&config).unwrap();
    let err = run_forward(&config, dictionary, "Lombok").await.unwrap_err();
    assert!(err.to_string().contains("unavailable"), "got: {err}");
}
