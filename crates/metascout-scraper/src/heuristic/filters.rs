//! Pure anchor predicates, composed by conjunction in [`passes_all`].

use super::anchors::AnchorInfo;

/// Visible text shorter than this (in characters) is treated as an icon or
/// abbreviation, never a product title.
const MIN_TEXT_LEN: usize = 3;

/// Query words must be longer than two characters to count.
const MIN_QUERY_WORD_LEN: usize = 3;

/// Leading characters of a query word used by the lenient prefix match.
const PREFIX_LEN: usize = 3;

/// Navigation labels that point at product paths on some layouts but are
/// never a product themselves.
const GENERIC_LABELS: &[&str] = &["games", "all", "new", "reviews", "more", "see all", "explore"];

/// Lowercased query words longer than two characters, split on anything that
/// is not alphanumeric.
#[must_use]
pub fn query_words(query: &str) -> Vec<String> {
    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= MIN_QUERY_WORD_LEN)
        .map(str::to_lowercase)
        .collect()
}

#[must_use]
pub fn has_meaningful_text(anchor: &AnchorInfo) -> bool {
    anchor.text.trim().chars().count() >= MIN_TEXT_LEN
}

#[must_use]
pub fn is_not_generic_label(anchor: &AnchorInfo) -> bool {
    let label = anchor.text.trim().to_lowercase();
    !GENERIC_LABELS.contains(&label.as_str())
}

#[must_use]
pub fn is_outside_landmark(anchor: &AnchorInfo) -> bool {
    !anchor.in_landmark
}

/// Graduated relevance check against the query.
///
/// Accepts, in order: an anchor inside a search-results container, an anchor
/// whose text or href contains a whole query word, and finally one whose text
/// or href contains the first three characters of any query word. With no
/// usable query words only container anchors pass.
#[must_use]
pub fn is_relevant(anchor: &AnchorInfo, words: &[String]) -> bool {
    if anchor.in_results {
        return true;
    }
    let haystack = haystack(anchor);
    matches_query_word(&haystack, words) || matches_query_prefix(&haystack, words)
}

/// Conjunction of every predicate, cheapest first.
#[must_use]
pub fn passes_all(anchor: &AnchorInfo, words: &[String]) -> bool {
    has_meaningful_text(anchor)
        && is_not_generic_label(anchor)
        && is_outside_landmark(anchor)
        && is_relevant(anchor, words)
}

fn haystack(anchor: &AnchorInfo) -> String {
    format!("{} {}", anchor.text, anchor.href).to_lowercase()
}

fn matches_query_word(haystack: &str, words: &[String]) -> bool {
    words.iter().any(|word| haystack.contains(word.as_str()))
}

fn matches_query_prefix(haystack: &str, words: &[String]) -> bool {
    words.iter().any(|word| {
        let prefix: String = word.chars().take(PREFIX_LEN).collect();
        haystack.contains(prefix.as_str())
    })
}
