use reqwest::StatusCode;

/// Errors produced while collecting offers
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// The server answered 404 for a listing or detail page
    #[error("no results found at {url}")]
    NotFound { url: String },

    /// Transport-level failure from the HTTP client
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other non-success status
    #[error("unexpected status {status} for {url}")]
    HttpStatus { url: String, status: StatusCode },

    /// An expected structural marker is absent from the page
    #[error("marker `{marker}` not found in {url}")]
    MissingMarker { marker: String, url: String },

    /// Tracking removal was requested but the link has no delimiter
    #[error("tracking delimiter `{delimiter}` not found in {link}")]
    DelimiterNotFound { delimiter: String, link: String },

    #[error("invalid selector `{selector}`")]
    InvalidSelector { selector: String },

    #[error("invalid sponsor pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    /// True for failures that come from fetching rather than parsing
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Http(_) | Self::HttpStatus { .. }
        )
    }

    pub(crate) fn missing(marker: &str, url: &str) -> Self {
        Self::MissingMarker {
            marker: marker.to_string(),
            url: url.to_string(),
        }
    }
}
