use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_REVERSE_URL: &str = "https://nominatim.openstreetmap.org/reverse";
pub const DEFAULT_USER_AGENT: &str = "ProjectDays/1.0 (contact: project.days.dev@gmail.com)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| invalid(var, e.to_string())),
            _ => Ok(None),
        }
    };

    let log_level = or_default("DAYS_LOG_LEVEL", "info");
    let search_url = or_default("DAYS_SEARCH_URL", DEFAULT_SEARCH_URL);
    let reverse_url = or_default("DAYS_REVERSE_URL", DEFAULT_REVERSE_URL);
    let user_agent = or_default("DAYS_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_optional_u64("DAYS_REQUEST_TIMEOUT_SECS")?;

    let max_attempts = parse_u32("DAYS_MAX_ATTEMPTS", "3")?;
    if max_attempts == 0 {
        return Err(invalid("DAYS_MAX_ATTEMPTS", "must be at least 1".to_string()));
    }
    let retry_backoff_ms = parse_u64("DAYS_RETRY_BACKOFF_MS", "1000")?;

    let synonyms_path = lookup("DAYS_SYNONYMS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        log_level,
        search_url,
        reverse_url,
        user_agent,
        request_timeout_secs,
        max_attempts,
        retry_backoff_ms,
        synonyms_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
