//! Error taxonomy
//!
//! Only the external boundary is fatal: network fetches and search
//! lookups. Missing rows, unknown terms and malformed cell fragments
//! degrade to absent fields and are reported through `log` as they
//! occur, never through `Err`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The url's host is not one of the three scraped sites.
    #[error("domain not allowed: {0}")]
    DisallowedDomain(String),

    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("search lookup failed: {0}")]
    Search(String),

    #[error("search output is not valid JSON: {0}")]
    SearchOutput(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
