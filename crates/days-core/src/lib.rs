pub mod app_config;
pub mod config;
pub mod synonyms;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use synonyms::{load_synonyms, parse_synonyms, SynonymConfig, SynonymsFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read synonyms file {path}: {source}")]
    SynonymsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse synonyms file: {0}")]
    SynonymsFileParse(#[from] serde_yaml::Error),

    #[error("synonyms validation failed: {0}")]
    Validation(String),
}
