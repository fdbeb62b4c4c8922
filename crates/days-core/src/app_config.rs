use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub search_url: String,
    pub reverse_url: String,
    pub user_agent: String,
    /// `None` leaves the HTTP client without a request timeout.
    pub request_timeout_secs: Option<u64>,
    /// Attempts per forward pass, including the first one.
    pub max_attempts: u32,
    /// Linear backoff step: the wait after attempt `n` is `n * step`.
    pub retry_backoff_ms: u64,
    pub synonyms_path: Option<PathBuf>,
}
