use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    /// Connection failure, timeout, or an error while reading the body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {name} header: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    #[error("invalid game URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The product page for an already-chosen URL could not be retrieved.
    #[error("failed to fetch product page {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ScraperError>,
    },
}

impl ScraperError {
    /// `true` when the underlying transport gave up because the timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            ScraperError::Http(e) => e.is_timeout(),
            ScraperError::Fetch { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}
