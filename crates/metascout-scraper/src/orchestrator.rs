//! Composition of the finders and the page extractor into the public
//! operations.
//!
//! Resolution is strictly sequential: structured search, then (only if that
//! found nothing) the HTML scan, then (only for `resolve_and_extract`) the
//! page fetch. Search-phase failures never surface; the page fetch is the one
//! fallible step.

use std::sync::Arc;

use metascout_core::{ProductRecord, ScoutOptions, SearchCandidate};

use crate::client::MetacriticClient;
use crate::error::ScraperError;
use crate::extract::PageExtractor;
use crate::heuristic::HeuristicFinder;
use crate::rate_limit::RequestPacer;
use crate::structured::StructuredFinder;

/// Entry point bundling a configured client with the resolution pipeline.
///
/// Holds no per-query state, so one `Scout` can serve many concurrent
/// resolutions.
#[derive(Debug, Clone)]
pub struct Scout {
    client: MetacriticClient,
}

impl Scout {
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the HTTP client cannot be built from `options`.
    pub fn new(options: &ScoutOptions) -> Result<Self, ScraperError> {
        Ok(Self::from_client(MetacriticClient::new(options)?))
    }

    #[must_use]
    pub fn from_client(client: MetacriticClient) -> Self {
        Self { client }
    }

    /// Spaces every outbound request through `pacer`.
    #[must_use]
    pub fn with_pacer(self, pacer: Arc<RequestPacer>) -> Self {
        Self {
            client: self.client.with_pacer(pacer),
        }
    }

    #[must_use]
    pub fn client(&self) -> &MetacriticClient {
        &self.client
    }

    /// Structured search first, the HTML scan only if that found nothing.
    pub async fn find_candidate(&self, query: &str) -> Option<SearchCandidate> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("blank query, nothing to resolve");
            return None;
        }

        if let Some(candidate) = StructuredFinder::new(&self.client).search(query).await {
            return Some(candidate);
        }

        tracing::info!(query, "structured search found nothing, scanning search page");
        let candidate = HeuristicFinder::new(&self.client).search(query).await;
        if candidate.is_none() {
            tracing::debug!(query, "no candidate found");
        }
        candidate
    }

    /// Best known match for `query` as a minimal record, without fetching
    /// the product page.
    pub async fn resolve(&self, query: &str) -> Option<ProductRecord> {
        self.find_candidate(query).await.map(ProductRecord::from)
    }

    /// Resolves `query` and, if a candidate was found, extracts its page.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Fetch`] if the chosen product page cannot be
    /// retrieved. Search-phase failures are never reported here; they yield
    /// `Ok(None)`.
    pub async fn resolve_and_extract(
        &self,
        query: &str,
    ) -> Result<Option<ProductRecord>, ScraperError> {
        let Some(candidate) = self.find_candidate(query).await else {
            return Ok(None);
        };
        self.extract(&candidate.url).await.map(Some)
    }

    /// Extracts the record for a known product page URL.
    ///
    /// # Errors
    ///
    /// See [`PageExtractor::extract`].
    pub async fn extract(&self, url: &str) -> Result<ProductRecord, ScraperError> {
        PageExtractor::new(&self.client).extract(url).await
    }
}

/// One-shot [`Scout::resolve`] with a client built from `options`.
///
/// # Errors
///
/// Returns [`ScraperError`] only if the HTTP client cannot be built.
pub async fn resolve(
    query: &str,
    options: &ScoutOptions,
) -> Result<Option<ProductRecord>, ScraperError> {
    Ok(Scout::new(options)?.resolve(query).await)
}

/// One-shot [`Scout::resolve_and_extract`] with a client built from `options`.
///
/// # Errors
///
/// Client construction failures and [`ScraperError::Fetch`].
pub async fn resolve_and_extract(
    query: &str,
    options: &ScoutOptions,
) -> Result<Option<ProductRecord>, ScraperError> {
    Scout::new(options)?.resolve_and_extract(query).await
}

/// One-shot [`Scout::extract`] with a client built from `options`.
///
/// # Errors
///
/// Client construction failures, [`ScraperError::InvalidUrl`] and
/// [`ScraperError::Fetch`].
pub async fn extract(url: &str, options: &ScoutOptions) -> Result<ProductRecord, ScraperError> {
    Scout::new(options)?.extract(url).await
}
