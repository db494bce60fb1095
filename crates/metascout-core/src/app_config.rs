use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SITE_BASE_URL: &str = "https://www.metacritic.com";
pub const DEFAULT_BACKEND_BASE_URL: &str = "https://backend.metacritic.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Per-call options for `resolve` / `extract`, plus the transport settings
/// that get threaded into the HTTP client when it is built.
///
/// `concurrency` and `delay_between_requests_ms` are honoured by the caller
/// that fans out many queries (the CLI), not inside a single resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutOptions {
    /// Per-fetch timeout covering connect, headers and body.
    pub timeout_ms: u64,
    /// Maximum number of resolutions the caller runs in parallel.
    pub concurrency: usize,
    /// Minimum spacing between two outbound requests to the same origin.
    pub delay_between_requests_ms: u64,
    /// Reserved: resolution currently always yields at most one record.
    pub max_candidates: usize,
    pub site_base_url: String,
    pub backend_base_url: String,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for ScoutOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 15_000,
            concurrency: 2,
            delay_between_requests_ms: 1_000,
            max_candidates: 1,
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

impl ScoutOptions {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn delay_between_requests(&self) -> Duration {
        Duration::from_millis(self.delay_between_requests_ms)
    }

    /// Checks the invariants the rest of the system relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a zero timeout, zero concurrency,
    /// zero `max_candidates`, or a base URL without an `http(s)://` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "timeout must be greater than zero".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::Validation(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.max_candidates == 0 {
            return Err(ConfigError::Validation(
                "max candidates must be at least 1".to_string(),
            ));
        }
        for (name, base) in [
            ("site base URL", &self.site_base_url),
            ("backend base URL", &self.backend_base_url),
        ] {
            if !(base.starts_with("https://") || base.starts_with("http://")) {
                return Err(ConfigError::Validation(format!(
                    "{name} must start with http:// or https://, got \"{base}\""
                )));
            }
        }
        Ok(())
    }
}

/// Process-level configuration for the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub options: ScoutOptions,
    pub log_level: String,
}
