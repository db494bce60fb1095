//! Critic and user review passes over a product page.

use metascout_core::{Review, ReviewKind};
use scraper::ElementRef;
use url::Url;

use super::selectors::{ReviewSelectors, CRITIC_REVIEWS, USER_REVIEWS};
use crate::normalize::{normalize_date, parse_critic_score, parse_user_score};

/// Critic entries in document order, then user entries in document order.
pub(super) fn collect_reviews(root: ElementRef<'_>, page_url: &Url) -> Vec<Review> {
    let mut reviews = review_pass(root, ReviewKind::Critic, &CRITIC_REVIEWS, page_url);
    reviews.extend(review_pass(root, ReviewKind::User, &USER_REVIEWS, page_url));
    reviews
}

fn review_pass(
    root: ElementRef<'_>,
    kind: ReviewKind,
    selectors: &ReviewSelectors,
    page_url: &Url,
) -> Vec<Review> {
    let reviews: Vec<Review> = selectors
        .entries
        .select_all(root)
        .into_iter()
        .filter_map(|entry| review_from_entry(entry, kind, selectors, page_url))
        .collect();
    tracing::debug!(?kind, count = reviews.len(), "review pass");
    reviews
}

fn review_from_entry(
    entry: ElementRef<'_>,
    kind: ReviewKind,
    selectors: &ReviewSelectors,
    page_url: &Url,
) -> Option<Review> {
    let source = selectors.source.first_text(entry);
    let quote = selectors.quote.first_text(entry);
    let score_text = selectors.score.first_text(entry);
    let score = match kind {
        ReviewKind::Critic => parse_critic_score(score_text.as_deref()).map(f64::from),
        ReviewKind::User => parse_user_score(score_text.as_deref()),
    };

    // Placeholders with no author, text or score carry no review.
    if source.is_none() && quote.is_none() && score.is_none() {
        return None;
    }

    let url = selectors
        .link
        .as_ref()
        .and_then(|link| link.first_attr(entry, "href"))
        .and_then(|href| absolute_link(page_url, &href));

    Some(Review {
        kind,
        source,
        quote,
        score,
        date: normalize_date(selectors.date.first_text(entry).as_deref()),
        url,
    })
}

/// Resolves `href` against the page and keeps it only if it is http(s).
fn absolute_link(page_url: &Url, href: &str) -> Option<String> {
    let resolved = page_url.join(href).ok()?;
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}
