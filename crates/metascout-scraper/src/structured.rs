//! Primary lookup through the site's JSON search backend.
//!
//! ## Observed envelope
//! ```json
//! {"data": {"totalResults": 12, "items": [
//!   {"type": "game-title", "slug": "fortnite", "title": "Fortnite",
//!    "platforms": [{"name": "PC"}, {"name": "PlayStation 5"}],
//!    "criticScoreSummary": {"score": 78}}
//! ]}}
//! ```
//! Items are deserialized one at a time so a single oddly shaped item (a person
//! or franchise entry with a different schema, a `null` list) is skipped
//! instead of failing the whole response.

use metascout_core::{PlatformSet, SearchCandidate};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::client::{MetacriticClient, ACCEPT_JSON};
use crate::error::ScraperError;
use crate::normalize::{clean_text, critic_score, normalize_platform};
use crate::path::GamePath;

/// `mcoTypeId` value that restricts backend results to games.
const GAME_CATEGORY_ID: &str = "13";

/// Item `type` values that denote a game product (as opposed to a person,
/// franchise, movie, ...).
const GAME_ITEM_TYPES: &[&str] = &["game-title", "game"];

#[derive(Debug, Default, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    data: Option<SearchData>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchData {
    #[serde(default)]
    items: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    platforms: Option<Vec<ItemPlatform>>,
    #[serde(default)]
    critic_score_summary: Option<ScoreSummary>,
}

#[derive(Debug, Deserialize)]
struct ItemPlatform {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScoreSummary {
    #[serde(default)]
    score: Option<f64>,
}

/// Finds the best candidate through the JSON search backend.
#[derive(Debug, Clone, Copy)]
pub struct StructuredFinder<'a> {
    client: &'a MetacriticClient,
}

impl<'a> StructuredFinder<'a> {
    #[must_use]
    pub fn new(client: &'a MetacriticClient) -> Self {
        Self { client }
    }

    /// Returns the first game item for `query`, or `None`.
    ///
    /// Transport failures, non-2xx responses and malformed JSON are all logged
    /// and reported as `None`: they are the signal to fall back to the HTML
    /// scan, never an error for the caller.
    pub async fn search(&self, query: &str) -> Option<SearchCandidate> {
        let url = search_url(self.client.backend_base_url(), query);
        let body = match self.client.get_text(&url, ACCEPT_JSON).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(query, error = %e, timeout = e.is_timeout(), "structured search failed");
                return None;
            }
        };

        match parse_search_response(&body, self.client.site_base_url()) {
            Ok(Some(candidate)) => {
                tracing::debug!(query, url = %candidate.url, "structured search matched");
                Some(candidate)
            }
            Ok(None) => {
                tracing::debug!(query, "structured search returned no game items");
                None
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "structured search response unreadable");
                None
            }
        }
    }
}

/// Builds the backend search URL: the query is percent-encoded into the path,
/// followed by paging, category and component metadata parameters.
#[must_use]
pub fn search_url(backend_base: &str, query: &str) -> String {
    let encoded = utf8_percent_encode(query.trim(), NON_ALPHANUMERIC);
    format!(
        "{}/finder/metacritic/search/{encoded}/web?offset=0&limit=1&mcoTypeId={GAME_CATEGORY_ID}\
         &componentName=search-tabs&componentDisplayName=Search+Page+Tabs&componentType=SearchResults",
        backend_base.trim_end_matches('/'),
    )
}

/// Parses a backend response body into at most one candidate.
///
/// Only the first item that is a game and carries a usable slug is
/// considered; later items are never compared against it.
///
/// # Errors
///
/// Returns [`ScraperError::Deserialize`] if `body` is not a JSON object of the
/// envelope shape.
pub fn parse_search_response(
    body: &str,
    site_base: &str,
) -> Result<Option<SearchCandidate>, ScraperError> {
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| ScraperError::Deserialize {
            context: "search backend envelope".to_string(),
            source: e,
        })?;

    let items = envelope
        .data
        .and_then(|data| data.items)
        .unwrap_or_default();

    Ok(items
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<SearchItem>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed search item");
                None
            }
        })
        .find_map(|item| candidate_from_item(item, site_base)))
}

fn candidate_from_item(item: SearchItem, site_base: &str) -> Option<SearchCandidate> {
    let is_game = item
        .kind
        .as_deref()
        .is_some_and(|kind| GAME_ITEM_TYPES.contains(&kind));
    if !is_game {
        return None;
    }

    let slug = item.slug.as_deref().and_then(clean_text)?;

    let platforms: PlatformSet = item
        .platforms
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| normalize_platform(p.name.as_deref()))
        .collect();

    let path = GamePath::new(platforms.first(), &slug)?;

    let name = item
        .title
        .as_deref()
        .and_then(clean_text)
        .or_else(|| item.name.as_deref().and_then(clean_text))
        .unwrap_or_else(|| slug.clone());

    let metascore = item
        .critic_score_summary
        .and_then(|summary| summary.score)
        .and_then(critic_score);

    Some(SearchCandidate {
        name,
        platforms,
        url: path.to_url(site_base),
        slug: path.slug,
        metascore,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SITE: &str = "https://www.metacritic.com";

    #[test]
    fn search_url_encodes_query_into_path() {
        let url = search_url("https://backend.metacritic.com/", "Grand Theft Auto V");
        assert!(url.starts_with(
            "https://backend.metacritic.com/finder/metacritic/search/Grand%20Theft%20Auto%20V/web?"
        ));
        assert!(url.contains("offset=0"));
        assert!(url.contains("limit=1"));
        assert!(url.contains("mcoTypeId=13"));
        assert!(url.contains("componentName=search-tabs"));
    }

    #[test]
    fn parses_first_game_item() {
        let body = json!({"data": {"items": [{
            "type": "game-title",
            "slug": "fortnite",
            "title": "Fortnite",
            "platforms": [{"name": "PC"}, {"name": "PS5"}],
            "criticScoreSummary": {"score": 78}
        }]}})
        .to_string();

        let candidate = parse_search_response(&body, SITE)
            .expect("valid json")
            .expect("one candidate");
        assert_eq!(candidate.name, "Fortnite");
        assert_eq!(
            candidate.platforms.iter().collect::<Vec<_>>(),
            vec!["pc", "playstation-5"]
        );
        assert_eq!(candidate.slug, "fortnite");
        assert_eq!(candidate.url, "https://www.metacritic.com/game/pc/fortnite/");
        assert_eq!(candidate.metascore, Some(78));
    }

    #[test]
    fn skips_non_game_items_and_items_without_slug() {
        let body = json!({"data": {"items": [
            {"type": "person", "slug": "hideo-kojima", "title": "Hideo Kojima"},
            {"type": "game-title", "slug": "", "title": "No Slug"},
            {"type": "game-title", "slug": "death-stranding", "title": "Death Stranding",
             "platforms": [{"name": "PlayStation 4"}]}
        ]}})
        .to_string();

        let candidate = parse_search_response(&body, SITE)
            .expect("valid json")
            .expect("one candidate");
        assert_eq!(candidate.slug, "death-stranding");
        assert_eq!(
            candidate.url,
            "https://www.metacritic.com/game/playstation-4/death-stranding/"
        );
    }

    #[test]
    fn only_non_game_items_yield_no_candidate() {
        let body = json!({"data": {"items": [
            {"type": "movie", "slug": "fortnite-movie", "title": "Fortnite"}
        ]}})
        .to_string();
        assert!(parse_search_response(&body, SITE)
            .expect("valid json")
            .is_none());
    }

    #[test]
    fn deduplicates_normalized_platforms() {
        let body = json!({"data": {"items": [{
            "type": "game-title", "slug": "hades", "title": "Hades",
            "platforms": [{"name": "Xbox One"}, {"name": "XBOX ONE"}, {"name": null}, {"name": "PC"}]
        }]}})
        .to_string();
        let candidate = parse_search_response(&body, SITE)
            .expect("valid json")
            .expect("one candidate");
        assert_eq!(
            candidate.platforms.iter().collect::<Vec<_>>(),
            vec!["xbox-one", "pc"]
        );
    }

    #[test]
    fn omits_platform_segment_when_no_platforms() {
        let body = json!({"data": {"items": [{
            "type": "game-title", "slug": "elden-ring", "name": "Elden Ring",
            "criticScoreSummary": {"score": null}
        }]}})
        .to_string();
        let candidate = parse_search_response(&body, SITE)
            .expect("valid json")
            .expect("one candidate");
        assert_eq!(candidate.name, "Elden Ring");
        assert_eq!(candidate.url, "https://www.metacritic.com/game/elden-ring/");
        assert!(candidate.platforms.is_empty());
        assert!(candidate.metascore.is_none());
    }

    #[test]
    fn malformed_item_is_skipped() {
        let body = json!({"data": {"items": [
            {"type": "game-title", "slug": 42},
            {"type": "game-title", "slug": "celeste", "title": "Celeste"}
        ]}})
        .to_string();
        let candidate = parse_search_response(&body, SITE)
            .expect("valid json")
            .expect("one candidate");
        assert_eq!(candidate.slug, "celeste");
    }

    #[test]
    fn missing_data_or_items_is_no_candidate() {
        assert!(parse_search_response("{}", SITE).expect("valid").is_none());
        assert!(parse_search_response(r#"{"data":{"items":null}}"#, SITE)
            .expect("valid")
            .is_none());
    }

    #[test]
    fn invalid_json_is_a_deserialize_error() {
        let err = parse_search_response("<html>blocked</html>", SITE).unwrap_err();
        assert!(
            matches!(err, ScraperError::Deserialize { .. }),
            "expected Deserialize, got: {err:?}"
        );
    }
}
