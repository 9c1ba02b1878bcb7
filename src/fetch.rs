//! Blocking page fetch with a domain allow list and courtesy delay
//!
//! One fetch per page, sequential, no retry. A failed fetch or a host
//! outside the allow list aborts the whole run.

use std::thread;
use std::time::Duration;

use log::info;
use scraper::Html;
use url::Url;

use crate::error::ScrapeError;

/// Delay between successive outbound requests. A courtesy throttle, not
/// a correctness mechanism: fixed, no backoff, no jitter.
pub const POLITENESS_DELAY: Duration = Duration::from_secs(1);

pub struct Fetcher {
    agent: ureq::Agent,
    allowed: Vec<String>,
}

impl Fetcher {
    pub fn new(allowed_hosts: &[&str]) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            allowed: allowed_hosts.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// Fetch one page and parse it into a document.
    pub fn fetch(&self, url: &str) -> Result<Html, ScrapeError> {
        self.check_allowed(url)?;

        info!("fetching {}", url);
        let body = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ScrapeError::Fetch {
                url: url.to_string(),
                source: Box::new(e),
            })?
            .into_body()
            .read_to_string()
            .map_err(|e| ScrapeError::Fetch {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        Ok(Html::parse_document(&body))
    }

    fn check_allowed(&self, url: &str) -> Result<(), ScrapeError> {
        let parsed = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let host = parsed.host_str().unwrap_or_default();
        if self.allowed.iter().any(|allowed| allowed == host) {
            Ok(())
        } else {
            Err(ScrapeError::DisallowedDomain(host.to_string()))
        }
    }
}

/// Sleep between outbound lookups and fetches.
pub fn politeness_pause() {
    thread::sleep(POLITENESS_DELAY);
}
