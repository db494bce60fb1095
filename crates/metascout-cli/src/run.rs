use futures::stream::{self, StreamExt};
use metascout_core::ProductRecord;
use metascout_scraper::{Scout, ScraperError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Best known match only, no product page fetch.
    Resolve,
    /// Resolve, then extract the full product page.
    ResolveAndExtract,
}

/// Runs every query with at most `concurrency` resolutions in flight.
///
/// Output keeps input order. Queries without a match contribute nothing; the
/// first page-extraction failure aborts the run.
pub(crate) async fn resolve_all(
    scout: &Scout,
    queries: &[String],
    mode: Mode,
    concurrency: usize,
) -> Result<Vec<ProductRecord>, ScraperError> {
    let outcomes = stream::iter(queries.iter().map(|query| async move {
        let outcome = match mode {
            Mode::Resolve => Ok(scout.resolve(query).await),
            Mode::ResolveAndExtract => scout.resolve_and_extract(query).await,
        };
        if matches!(outcome, Ok(None)) {
            tracing::warn!(query = %query, "no matching product found");
        }
        outcome
    }))
    .buffered(concurrency.max(1))
    .collect::<Vec<_>>()
    .await;

    outcomes.into_iter().filter_map(Result::transpose).collect()
}
