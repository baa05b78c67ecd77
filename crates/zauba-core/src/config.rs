use crate::app_config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_LISTING_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
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
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// configuration pointed at the live registry site.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("\"{raw}\" is not an http(s) URL"),
            })
        }
    };

    let base_url = parse_url("ZAUBA_BASE_URL", DEFAULT_BASE_URL)?;
    let listing_url = parse_url("ZAUBA_LISTING_URL", DEFAULT_LISTING_URL)?;
    let max_companies = parse_usize("ZAUBA_MAX_COMPANIES", "10")?;
    let output_path = PathBuf::from(or_default("ZAUBA_OUTPUT_PATH", "recent_companies.csv"));
    let log_level = or_default("ZAUBA_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("ZAUBA_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("ZAUBA_USER_AGENT", DEFAULT_USER_AGENT);
    let delay_min_ms = parse_u64("ZAUBA_DELAY_MIN_MS", "2000")?;
    let delay_max_ms = parse_u64("ZAUBA_DELAY_MAX_MS", "4000")?;

    if delay_min_ms > delay_max_ms {
        return Err(ConfigError::InvalidEnvVar {
            var: "ZAUBA_DELAY_MIN_MS".to_string(),
            reason: format!("{delay_min_ms} exceeds ZAUBA_DELAY_MAX_MS ({delay_max_ms})"),
        });
    }

    Ok(AppConfig {
        base_url,
        listing_url,
        max_companies,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
        delay_min_ms,
        delay_max_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
