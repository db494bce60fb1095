//! Anchor collection from a search-results page.
//!
//! Collection is two-staged. Anchors inside a recognised search-results
//! region are preferred; only when no region yields a product anchor is the
//! whole document scanned, and in that case every anchor records whether it
//! sits under a navigation landmark so the filters can drop it.

use std::sync::LazyLock;

use scraper::node::Element;
use scraper::{ElementRef, Html};

use crate::strategy::{element_text, SelectorChain};

/// Search-results regions, current layout first.
static RESULT_CONTAINERS: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='search-results']",
        ".c-pageSiteSearch-results",
        "ul.search_results",
        ".search_results",
        ".result_wrap",
    ])
});

static PRODUCT_ANCHORS: LazyLock<SelectorChain> =
    LazyLock::new(|| SelectorChain::new(&["a[href*='/game/']"]));

static TITLE: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='product-title']",
        ".c-pageSiteSearch-results-item-title",
        ".product_title",
        "h3",
    ])
});

static PLATFORM: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='product-platform']",
        ".c-pageSiteSearch-results-item-platform",
        ".platform",
    ])
});

static SCORE: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='product-metascore']",
        ".c-siteReviewScore span",
        ".metascore_w",
    ])
});

const LANDMARK_TAGS: &[&str] = &["nav", "header", "footer", "aside"];
const LANDMARK_ROLES: &[&str] = &["navigation", "banner", "contentinfo", "complementary"];
const LANDMARK_CLASS_HINTS: &[&str] = &[
    "nav",
    "navbar",
    "navigation",
    "header",
    "footer",
    "sidebar",
    "menu",
];

/// Everything the filters and the candidate builder need from one anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorInfo {
    pub href: String,
    /// Full visible text of the anchor, whitespace collapsed.
    pub text: String,
    pub title_text: Option<String>,
    pub platform_text: Option<String>,
    pub score_text: Option<String>,
    /// Inside a plausible search-results container.
    pub in_results: bool,
    /// Under a nav/header/footer/sidebar landmark.
    pub in_landmark: bool,
}

/// Collects product anchors from `document` in document order.
#[must_use]
pub fn collect_anchors(document: &Html) -> Vec<AnchorInfo> {
    let root = document.root_element();

    let from_results: Vec<AnchorInfo> = RESULT_CONTAINERS
        .select_all(root)
        .into_iter()
        .flat_map(|container| PRODUCT_ANCHORS.select_all(container))
        .filter_map(|anchor| anchor_info(anchor, true, false))
        .collect();
    if !from_results.is_empty() {
        return from_results;
    }

    tracing::debug!("no search-results region found, scanning every product anchor");
    PRODUCT_ANCHORS
        .select_all(root)
        .into_iter()
        .filter_map(|anchor| {
            anchor_info(
                anchor,
                has_ancestor(anchor, looks_like_result_container),
                has_ancestor(anchor, is_landmark),
            )
        })
        .collect()
}

fn anchor_info(anchor: ElementRef<'_>, in_results: bool, in_landmark: bool) -> Option<AnchorInfo> {
    let href = anchor.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    Some(AnchorInfo {
        href: href.to_owned(),
        text: element_text(anchor).unwrap_or_default(),
        title_text: TITLE.first_text(anchor),
        platform_text: PLATFORM.first_text(anchor),
        score_text: SCORE.first_text(anchor),
        in_results,
        in_landmark,
    })
}

fn has_ancestor(anchor: ElementRef<'_>, predicate: fn(&Element) -> bool) -> bool {
    anchor
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(predicate)
}

fn is_landmark(element: &Element) -> bool {
    if LANDMARK_TAGS.contains(&element.name()) {
        return true;
    }
    if element
        .attr("role")
        .is_some_and(|role| LANDMARK_ROLES.contains(&role.trim().to_ascii_lowercase().as_str()))
    {
        return true;
    }
    element.classes().any(|class| {
        class_tokens(class).any(|token| LANDMARK_CLASS_HINTS.contains(&token.as_str()))
    })
}

/// Splits a class name into lowercase words on `-`, `_` and camelCase
/// boundaries: `c-globalHeader` gives `c`, `global`, `header`.
fn class_tokens(class: &str) -> impl Iterator<Item = String> + '_ {
    class
        .split(['-', '_'])
        .flat_map(|part| {
            let mut words = Vec::new();
            let mut current = String::new();
            for c in part.chars() {
                if c.is_ascii_uppercase() && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                current.push(c.to_ascii_lowercase());
            }
            words.push(current);
            words
        })
        .filter(|word| !word.is_empty())
}

fn looks_like_result_container(element: &Element) -> bool {
    let mentions_result = |value: &str| value.to_ascii_lowercase().contains("result");
    element.id().is_some_and(mentions_result)
        || element.attr("data-testid").is_some_and(mentions_result)
        || element.classes().any(mentions_result)
}
