//! Fallback lookup that scans the human-facing search-results page.
//!
//! The page has no stable marker for "this is a search result", so the scan
//! is a pipeline: collect anchors ([`anchors`]), drop noise with pure
//! predicates ([`filters`]), parse each surviving href as a product path,
//! deduplicate by URL and keep the first.

mod anchors;
mod filters;

use std::collections::HashSet;

use metascout_core::{PlatformSet, SearchCandidate};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use scraper::Html;

use crate::client::{MetacriticClient, ACCEPT_HTML};
use crate::normalize::{normalize_platform, parse_critic_score};
use crate::path::GamePath;

use anchors::AnchorInfo;

/// `category` query value that restricts the search page to games.
const GAME_CATEGORY: &str = "13";

/// Finds the best candidate by scanning the HTML search page.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicFinder<'a> {
    client: &'a MetacriticClient,
}

impl<'a> HeuristicFinder<'a> {
    #[must_use]
    pub fn new(client: &'a MetacriticClient) -> Self {
        Self { client }
    }

    /// Returns the first qualifying product anchor for `query`, or `None`.
    ///
    /// A failed fetch is logged and reported as `None`.
    pub async fn search(&self, query: &str) -> Option<SearchCandidate> {
        let url = search_page_url(self.client.site_base_url(), query);
        let html = match self.client.get_text(&url, ACCEPT_HTML).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(query, error = %e, timeout = e.is_timeout(), "search page fetch failed");
                return None;
            }
        };

        let candidates = parse_search_html(&html, query, self.client.site_base_url());
        tracing::debug!(query, count = candidates.len(), "search page candidates");
        candidates.into_iter().next()
    }
}

/// `<site>/search/<encoded query>/?category=13`
#[must_use]
pub fn search_page_url(site_base: &str, query: &str) -> String {
    let encoded = utf8_percent_encode(query.trim(), NON_ALPHANUMERIC);
    format!(
        "{}/search/{encoded}/?category={GAME_CATEGORY}",
        site_base.trim_end_matches('/')
    )
}

/// All qualifying candidates on a search page, deduplicated by URL with the
/// first occurrence kept, in document order.
#[must_use]
pub fn parse_search_html(html: &str, query: &str, site_base: &str) -> Vec<SearchCandidate> {
    let document = Html::parse_document(html);
    let words = filters::query_words(query);

    let mut seen = HashSet::new();
    anchors::collect_anchors(&document)
        .into_iter()
        .filter(|anchor| filters::passes_all(anchor, &words))
        .filter_map(|anchor| candidate_from_anchor(&anchor, site_base))
        .filter(|candidate| seen.insert(candidate.url.clone()))
        .collect()
}

fn candidate_from_anchor(anchor: &AnchorInfo, site_base: &str) -> Option<SearchCandidate> {
    let Some(path) = GamePath::parse(&anchor.href) else {
        tracing::trace!(href = %anchor.href, "anchor is not a product main page");
        return None;
    };

    let name = anchor
        .title_text
        .clone()
        .or_else(|| Some(anchor.text.clone()).filter(|text| !text.is_empty()))?;

    let platform = normalize_platform(anchor.platform_text.as_deref())
        .or_else(|| normalize_platform(path.platform.as_deref()));
    let platforms: PlatformSet = platform.into_iter().collect();

    Some(SearchCandidate {
        name,
        platforms,
        url: path.to_url(site_base),
        metascore: parse_critic_score(anchor.score_text.as_deref()),
        slug: path.slug,
    })
}
