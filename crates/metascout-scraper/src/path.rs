//! Product path grammar: `/game/<slug>/` or `/game/<platform>/<slug>/`.

use crate::normalize::is_platform_token;

/// Final path segments that point at a sub-page of a product rather than the
/// product's main page.
const SUB_PAGE_MARKERS: &[&str] = &["critic-reviews", "user-reviews", "reviews"];

/// The platform and slug recovered from a product path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePath {
    pub platform: Option<String>,
    pub slug: String,
}

impl GamePath {
    /// Builds a path from an optional platform token and a slug.
    ///
    /// Returns `None` if the slug is not a single clean path segment. A
    /// platform that is not a known path token is dropped, since it could not
    /// round-trip through [`GamePath::parse`].
    #[must_use]
    pub fn new(platform: Option<&str>, slug: &str) -> Option<Self> {
        let slug = slug.trim();
        if !is_valid_segment(slug) || is_sub_page_marker(slug) {
            return None;
        }
        Some(Self {
            platform: platform
                .filter(|p| is_platform_token(p))
                .map(str::to_owned),
            slug: slug.to_owned(),
        })
    }

    /// Parses an absolute (`https://host/game/...`), protocol-relative
    /// (`//host/game/...`) or root-relative (`/game/...`) href.
    ///
    /// The query string and fragment are ignored. Returns `None` for anything
    /// that is not a product main page: a non-`/game/` path, a path whose final
    /// segment is a sub-page marker, or a two-segment path whose first segment
    /// is not a known platform token.
    #[must_use]
    pub fn parse(href: &str) -> Option<Self> {
        let path = href_path(href.trim())?;
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        if segments.next()? != "game" {
            return None;
        }
        let rest: Vec<&str> = segments.collect();

        match rest.as_slice() {
            [slug] => Self::new(None, slug),
            [first, slug] if is_platform_token(first) => Self::new(Some(*first), slug),
            _ => None,
        }
    }

    /// The root-relative path, always with a trailing slash.
    #[must_use]
    pub fn to_path(&self) -> String {
        match &self.platform {
            Some(platform) => format!("/game/{platform}/{}/", self.slug),
            None => format!("/game/{}/", self.slug),
        }
    }

    /// The absolute URL under `base` (scheme + host, trailing slash optional).
    #[must_use]
    pub fn to_url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.to_path())
    }
}

fn href_path(href: &str) -> Option<String> {
    if href.starts_with("//") {
        return url::Url::parse(&format!("https:{href}"))
            .ok()
            .map(|u| u.path().to_owned());
    }
    if href.starts_with('/') {
        let end = href.find(['?', '#']).unwrap_or(href.len());
        return Some(href[..end].to_owned());
    }
    let parsed = url::Url::parse(href).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.path().to_owned())
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
}

fn is_sub_page_marker(segment: &str) -> bool {
    SUB_PAGE_MARKERS.contains(&segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_platform_and_slug() {
        let parsed = GamePath::parse("/game/playstation-5/elden-ring/").expect("product path");
        assert_eq!(parsed.platform.as_deref(), Some("playstation-5"));
        assert_eq!(parsed.slug, "elden-ring");
    }

    #[test]
    fn parses_slug_only_path() {
        let parsed = GamePath::parse("/game/elden-ring/").expect("product path");
        assert!(parsed.platform.is_none());
        assert_eq!(parsed.slug, "elden-ring");
    }

    #[test]
    fn rejects_sub_page_paths() {
        assert!(GamePath::parse("/game/pc/critic-reviews/").is_none());
        assert!(GamePath::parse("/game/user-reviews/").is_none());
        assert!(GamePath::parse("/game/pc/elden-ring/critic-reviews/").is_none());
        assert!(GamePath::parse("/game/elden-ring/reviews/").is_none());
    }

    #[test]
    fn rejects_two_segments_without_platform_token() {
        assert!(GamePath::parse("/game/elden-ring/details/").is_none());
    }

    #[test]
    fn rejects_non_product_paths() {
        assert!(GamePath::parse("/browse/game/").is_none());
        assert!(GamePath::parse("/game/").is_none());
        assert!(GamePath::parse("/movie/dune/").is_none());
        assert!(GamePath::parse("mailto:someone@example.com").is_none());
        assert!(GamePath::parse("").is_none());
    }

    #[test]
    fn ignores_query_and_fragment() {
        let parsed = GamePath::parse("/game/fortnite/?platform=pc#reviews").expect("product path");
        assert_eq!(parsed.slug, "fortnite");
        assert_eq!(parsed.to_path(), "/game/fortnite/");
    }

    #[test]
    fn parses_absolute_and_protocol_relative_hrefs() {
        let abs = GamePath::parse("https://www.metacritic.com/game/pc/fortnite/?x=1")
            .expect("absolute href");
        assert_eq!(abs.platform.as_deref(), Some("pc"));
        let rel = GamePath::parse("//www.metacritic.com/game/hades/").expect("protocol-relative");
        assert_eq!(rel.slug, "hades");
    }

    #[test]
    fn to_url_always_has_trailing_slash_and_no_query() {
        let path = GamePath::new(Some("pc"), "fortnite").expect("valid");
        let url = path.to_url("https://www.metacritic.com/");
        assert_eq!(url, "https://www.metacritic.com/game/pc/fortnite/");
        assert!(url.ends_with('/'));
        assert!(!url.contains('?'));
    }

    #[test]
    fn new_drops_unknown_platform_and_rejects_bad_slugs() {
        let path = GamePath::new(Some("Neo Geo Pocket"), "metal-slug").expect("valid slug");
        assert!(path.platform.is_none());
        assert!(GamePath::new(None, "").is_none());
        assert!(GamePath::new(None, "a/b").is_none());
        assert!(GamePath::new(None, "critic-reviews").is_none());
    }
}
