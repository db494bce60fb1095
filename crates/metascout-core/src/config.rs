use crate::app_config::{AppConfig, ScoutOptions};
use crate::ConfigError;

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or fails validation.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or fails validation.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset variables fall back to
/// [`ScoutOptions::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = ScoutOptions::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let options = ScoutOptions {
        timeout_ms: parse_u64("METASCOUT_TIMEOUT_MS", defaults.timeout_ms)?,
        concurrency: parse_usize("METASCOUT_CONCURRENCY", defaults.concurrency)?,
        delay_between_requests_ms: parse_u64(
            "METASCOUT_DELAY_MS",
            defaults.delay_between_requests_ms,
        )?,
        max_candidates: parse_usize("METASCOUT_MAX_CANDIDATES", defaults.max_candidates)?,
        site_base_url: or_default("METASCOUT_SITE_BASE_URL", &defaults.site_base_url)
            .trim_end_matches('/')
            .to_string(),
        backend_base_url: or_default("METASCOUT_BACKEND_BASE_URL", &defaults.backend_base_url)
            .trim_end_matches('/')
            .to_string(),
        user_agent: or_default("METASCOUT_USER_AGENT", &defaults.user_agent),
        accept_language: defaults.accept_language,
    };
    options.validate()?;

    let log_level = or_default("METASCOUT_LOG_LEVEL", "warn");

    Ok(AppConfig { options, log_level })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
