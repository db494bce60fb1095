//! Output records shared by the finders, the page extractor and the CLI.
//!
//! ## Absence
//! Every optional field stays `None` when the source document omits it or the
//! value cannot be parsed. Nothing here is ever coerced to `0` or `""`; when
//! serialized, absent fields appear as `null`.
//!
//! ## Score scales
//! Critic scores (the aggregate metascore and individual critic reviews) are on a
//! 0-100 integer scale. User scores (the aggregate userscore and individual user
//! reviews) are on a 0-10 decimal scale. The two are never converted into each other.

use serde::{Deserialize, Serialize};

use crate::platforms::PlatformSet;

/// A provisional identification of a product page, produced by either finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCandidate {
    pub name: String,
    pub platforms: PlatformSet,
    /// Path segment identifying the product (e.g. `"elden-ring"`).
    pub slug: String,
    /// Absolute URL of shape `/game/<slug>/` or `/game/<platform>/<slug>/`,
    /// always with a trailing slash and no query string.
    pub url: String,
    pub metascore: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    Critic,
    User,
}

/// A single critic or user review, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub kind: ReviewKind,
    /// Outlet name for critic reviews, username for user reviews.
    pub source: Option<String>,
    pub quote: Option<String>,
    /// Native scale of `kind`: 0-100 whole numbers for critics, 0-10 for users.
    pub score: Option<f64>,
    /// ISO-8601 (`YYYY-MM-DD`) when the page text could be parsed, raw text otherwise.
    pub date: Option<String>,
    /// Absolute link to the full review. Only ever set for critic reviews.
    pub url: Option<String>,
}

/// The structured rating data for one product-on-platform page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub platforms: PlatformSet,
    pub slug: String,
    pub url: String,
    pub metascore: Option<u8>,
    pub userscore: Option<f64>,
    pub critic_reviews_count: Option<u64>,
    pub user_ratings_count: Option<u64>,
    pub release_date: Option<String>,
    pub reviews: Vec<Review>,
}

impl From<SearchCandidate> for ProductRecord {
    /// A minimal record carrying only what the candidate already knew.
    fn from(candidate: SearchCandidate) -> Self {
        Self {
            name: candidate.name,
            platforms: candidate.platforms,
            slug: candidate.slug,
            url: candidate.url,
            metascore: candidate.metascore,
            userscore: None,
            critic_reviews_count: None,
            user_ratings_count: None,
            release_date: None,
            reviews: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fortnite() -> SearchCandidate {
        SearchCandidate {
            name: "Fortnite".to_string(),
            platforms: vec!["pc".to_string(), "playstation-5".to_string()].into(),
            slug: "fortnite".to_string(),
            url: "https://www.metacritic.com/game/pc/fortnite/".to_string(),
            metascore: Some(78),
        }
    }

    #[test]
    fn record_from_candidate_leaves_extraction_fields_absent() {
        let record = ProductRecord::from(fortnite());
        assert_eq!(record.name, "Fortnite");
        assert_eq!(record.metascore, Some(78));
        assert!(record.userscore.is_none());
        assert!(record.critic_reviews_count.is_none());
        assert!(record.user_ratings_count.is_none());
        assert!(record.release_date.is_none());
        assert!(record.reviews.is_empty());
    }

    #[test]
    fn record_serializes_absent_fields_as_null_with_camel_case_keys() {
        let value = serde_json::to_value(ProductRecord::from(fortnite())).expect("serializable");
        assert_eq!(value["criticReviewsCount"], serde_json::Value::Null);
        assert_eq!(value["userRatingsCount"], serde_json::Value::Null);
        assert_eq!(value["releaseDate"], serde_json::Value::Null);
        assert_eq!(value["platforms"], serde_json::json!(["pc", "playstation-5"]));
        assert_eq!(value["metascore"], 78);
    }

    #[test]
    fn review_kind_serializes_lowercase() {
        let review = Review {
            kind: ReviewKind::Critic,
            source: Some("IGN".to_string()),
            quote: None,
            score: Some(90.0),
            date: Some("2022-02-23".to_string()),
            url: None,
        };
        let value = serde_json::to_value(review).expect("serializable");
        assert_eq!(value["kind"], "critic");
        assert_eq!(value["quote"], serde_json::Value::Null);
    }
}
