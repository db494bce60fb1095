//! Origin extraction used to key request pacing.

/// Extracts the scheme+host(+port) origin from a URL.
///
/// Given `"https://www.metacritic.com/game/elden-ring/?ref=x"`, returns
/// `"https://www.metacritic.com"`.
#[must_use]
pub fn extract_origin(url: &str) -> String {
    url::Url::parse(url).map_or_else(
        |e| {
            tracing::debug!(url, error = %e, "could not parse URL; splitting on '/' for origin");
            url.trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}
