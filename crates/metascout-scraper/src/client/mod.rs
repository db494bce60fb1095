//! HTTP transport shared by the finders and the page extractor.

mod origin;

use std::sync::Arc;
use std::time::Duration;

use metascout_core::ScoutOptions;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;

use crate::error::ScraperError;
use crate::rate_limit::RequestPacer;

pub use origin::extract_origin;

pub(crate) const ACCEPT_JSON: &str = "application/json, text/plain;q=0.9, */*;q=0.8";
pub(crate) const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Upper bound for establishing a connection; the overall per-fetch timeout
/// still applies on top.
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin GET-only wrapper around `reqwest` for the review site and its backend.
///
/// Built once from [`ScoutOptions`]: the per-fetch timeout and the fixed
/// browser-like header set (`User-Agent`, `Accept`, `Accept-Language`,
/// `Cache-Control`) are baked into the underlying client. Non-2xx responses
/// come back as [`ScraperError::UnexpectedStatus`]; connection failures and
/// timeouts as [`ScraperError::Http`].
#[derive(Debug, Clone)]
pub struct MetacriticClient {
    client: Client,
    site_base_url: String,
    backend_base_url: String,
    pacer: Option<Arc<RequestPacer>>,
}

impl MetacriticClient {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidHeader`] if the configured
    /// `Accept-Language` is not a valid header value, or [`ScraperError::Http`]
    /// if the underlying `reqwest::Client` cannot be constructed (e.g. an
    /// invalid `User-Agent`).
    pub fn new(options: &ScoutOptions) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_str(&options.accept_language).map_err(|e| {
                ScraperError::InvalidHeader {
                    name: "Accept-Language",
                    reason: e.to_string(),
                }
            })?,
        );
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let timeout = options.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
            .user_agent(options.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            site_base_url: options.site_base_url.trim_end_matches('/').to_owned(),
            backend_base_url: options.backend_base_url.trim_end_matches('/').to_owned(),
            pacer: None,
        })
    }

    /// Routes every outbound request through `pacer` first.
    #[must_use]
    pub fn with_pacer(mut self, pacer: Arc<RequestPacer>) -> Self {
        self.pacer = Some(pacer);
        self
    }

    /// Base URL of the human-facing site, without a trailing slash.
    #[must_use]
    pub fn site_base_url(&self) -> &str {
        &self.site_base_url
    }

    /// Base URL of the JSON search backend, without a trailing slash.
    #[must_use]
    pub fn backend_base_url(&self) -> &str {
        &self.backend_base_url
    }

    /// Performs one GET and returns the body decoded as (lossy) UTF-8.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`]: connection failure, timeout, or body read failure.
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    pub(crate) async fn get_text(&self, url: &str, accept: &str) -> Result<String, ScraperError> {
        if let Some(pacer) = &self.pacer {
            pacer.wait_turn(&extract_origin(url)).await;
        }

        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(url, bytes = bytes.len(), "response received");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
