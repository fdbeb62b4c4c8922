use thiserror::Error;

/// Errors raised inside the resolution client.
///
/// These never reach callers of the resolve methods; they decide whether a
/// request is retried and which [`crate::Resolution`] variant is returned.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
