//! arXiv metadata source and the errors it can produce.
//!
//! [`ArxivSource`] covers the three network-facing steps of the pipeline:
//!
//! - [`extract_identifier`]: abstract page URL to arXiv identifier
//! - [`ArxivSource::query_raw`]: one batched `id_list` request to the export API
//! - [`parse_feed`]: Atom response to [`Record`](crate::models::Record)s
//!
//! Every failure is a [`SourceError`] and none of them are retried.

mod arxiv;

pub use arxiv::{extract_identifier, parse_feed, ArxivSource};

/// Errors that can occur when talking to arXiv
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Invalid input: bad URL or empty identifier
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network or HTTP error, including timeouts and non-success status codes
    #[error("Network error: {0}")]
    Network(String),

    /// Malformed response: invalid XML or an entry missing a field
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Network(format!("request timed out: {}", err))
        } else {
            SourceError::Network(err.to_string())
        }
    }
}

impl From<quick_xml::Error> for SourceError {
    fn from(err: quick_xml::Error) -> Self {
        SourceError::Parse(format!("XML: {}", err))
    }
}

impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::InvalidRequest(format!("not a URL: {}", err))
    }
}
