//! Prioritized extraction strategies.
//!
//! Every field on the site has moved at least once, so each lookup is an
//! ordered list of strategies (current layout first, legacy layouts after)
//! and the first one that produces a value wins.

use scraper::{ElementRef, Selector};

use crate::normalize::clean_text;

/// Runs `strategies` in order and returns the first `Some`.
pub fn first_match<T, F>(strategies: impl IntoIterator<Item = F>) -> Option<T>
where
    F: FnOnce() -> Option<T>,
{
    strategies.into_iter().find_map(|strategy| strategy())
}

/// Visible text of an element with whitespace collapsed; `None` when blank.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> Option<String> {
    clean_text(&element.text().collect::<String>())
}

/// An ordered list of CSS selectors tried one after another.
#[derive(Debug)]
pub struct SelectorChain {
    selectors: Vec<Selector>,
}

impl SelectorChain {
    /// Compiles `sources` in order. A source that fails to parse is logged and
    /// skipped so a single bad selector cannot take the whole chain down.
    #[must_use]
    pub fn new(sources: &[&str]) -> Self {
        let selectors = sources
            .iter()
            .filter_map(|source| match Selector::parse(source) {
                Ok(selector) => Some(selector),
                Err(e) => {
                    tracing::warn!(selector = source, error = ?e, "skipping invalid selector");
                    None
                }
            })
            .collect();
        Self { selectors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// First non-blank text under `scope`, trying each selector in turn and,
    /// within a selector, each match in document order.
    #[must_use]
    pub fn first_text(&self, scope: ElementRef<'_>) -> Option<String> {
        first_match(
            self.selectors
                .iter()
                .map(|selector| move || scope.select(selector).find_map(element_text)),
        )
    }

    /// First non-blank value of `attr` on a matching element under `scope`.
    #[must_use]
    pub fn first_attr(&self, scope: ElementRef<'_>, attr: &str) -> Option<String> {
        first_match(self.selectors.iter().map(|selector| {
            move || {
                scope
                    .select(selector)
                    .find_map(|el| el.value().attr(attr).and_then(clean_text))
            }
        }))
    }

    /// First element under `scope` matched by any selector, in chain order.
    #[must_use]
    pub fn first_element<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        first_match(
            self.selectors
                .iter()
                .map(|selector| move || scope.select(selector).next()),
        )
    }

    /// All elements matched by the first selector that matches anything.
    ///
    /// Layouts are never mixed: once the current-layout selector finds entries,
    /// legacy selectors are not consulted, so the same entry is not collected
    /// twice from overlapping markup.
    #[must_use]
    pub fn select_all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        first_match(self.selectors.iter().map(|selector| {
            move || {
                let found: Vec<ElementRef<'a>> = scope.select(selector).collect();
                (!found.is_empty()).then_some(found)
            }
        }))
        .unwrap_or_default()
    }

    /// `true` when `element` itself matches any selector in the chain.
    #[must_use]
    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        self.selectors.iter().any(|selector| selector.matches(&element))
    }
}
