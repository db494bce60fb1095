//! Product page extraction.
//!
//! Every scalar field is looked up through a [`SelectorChain`](crate::strategy::SelectorChain)
//! in [`selectors`]; a field no strategy can find stays `None`. Name and
//! platform additionally fall back to what the URL path says, so a page that
//! drops its hero block still yields a usable record.

mod reviews;
mod selectors;

use metascout_core::{PlatformSet, ProductRecord};
use scraper::Html;
use url::Url;

use crate::client::{MetacriticClient, ACCEPT_HTML};
use crate::error::ScraperError;
use crate::normalize::{
    normalize_date, normalize_platform, parse_count, parse_critic_score, parse_user_score,
};
use crate::path::GamePath;

/// Fetches a product page and extracts a [`ProductRecord`] from it.
#[derive(Debug, Clone, Copy)]
pub struct PageExtractor<'a> {
    client: &'a MetacriticClient,
}

impl<'a> PageExtractor<'a> {
    #[must_use]
    pub fn new(client: &'a MetacriticClient) -> Self {
        Self { client }
    }

    /// Extracts the record for the product page at `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `url` is not an absolute http(s) URL
    ///   with a product path. Nothing is fetched in that case.
    /// - [`ScraperError::Fetch`] if the page cannot be retrieved (transport
    ///   failure, timeout or non-2xx status).
    pub async fn extract(&self, url: &str) -> Result<ProductRecord, ScraperError> {
        let (page_url, path) = product_location(url)?;

        let html = self
            .client
            .get_text(page_url.as_str(), ACCEPT_HTML)
            .await
            .map_err(|e| ScraperError::Fetch {
                url: url.to_owned(),
                source: Box::new(e),
            })?;

        let record = parse_product_page(&html, &page_url, &path);
        tracing::debug!(
            url = %record.url,
            reviews = record.reviews.len(),
            has_metascore = record.metascore.is_some(),
            "product page extracted"
        );
        Ok(record)
    }
}

/// Validates `url` and recovers its product path.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] when `url` does not parse, is not
/// http(s), or does not point at a product main page.
pub fn product_location(url: &str) -> Result<(Url, GamePath), ScraperError> {
    let invalid = |reason: &str| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: reason.to_owned(),
    };

    let page_url = Url::parse(url.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(page_url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    let path = GamePath::parse(page_url.as_str())
        .ok_or_else(|| invalid("path is not /game/<slug>/ or /game/<platform>/<slug>/"))?;
    Ok((page_url, path))
}

/// Extracts a record from product page markup.
///
/// `page_url` resolves relative review links; `path` supplies the slug, the
/// canonical URL and the name/platform fallbacks.
#[must_use]
pub fn parse_product_page(html: &str, page_url: &Url, path: &GamePath) -> ProductRecord {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let name = selectors::TITLE
        .first_text(root)
        .unwrap_or_else(|| path.slug.clone());

    let platform = normalize_platform(selectors::PLATFORM.first_text(root).as_deref())
        .or_else(|| path.platform.clone());
    let platforms: PlatformSet = platform.into_iter().collect();

    ProductRecord {
        name,
        platforms,
        slug: path.slug.clone(),
        url: path.to_url(&page_url.origin().ascii_serialization()),
        metascore: parse_critic_score(selectors::METASCORE.first_text(root).as_deref()),
        userscore: parse_user_score(selectors::USERSCORE.first_text(root).as_deref()),
        critic_reviews_count: parse_count(selectors::CRITIC_COUNT.first_text(root).as_deref()),
        user_ratings_count: parse_count(selectors::USER_COUNT.first_text(root).as_deref()),
        release_date: normalize_date(selectors::RELEASE_DATE.first_text(root).as_deref()),
        reviews: reviews::collect_reviews(root, page_url),
    }
}

#[cfg(test)]
#[path = "../extract_test.rs"]
mod tests;
