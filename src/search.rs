//! Search resolution via the external `googler` command
//!
//! One lookup restricted to a single host; the top hit's url comes back
//! percent-decoded. Finding nothing is a normal outcome and yields an
//! empty string. A failing command is fatal: without search results the
//! run cannot proceed.

use std::process::Command;

use log::info;
use serde::Deserialize;

use crate::error::ScrapeError;

/// The subset of the search command's JSON output we care about.
#[derive(Debug, Deserialize)]
struct SearchHit {
    url: String,
}

/// Resolve a free-text query to the top result on one site.
pub fn resolve(query: &str, site: &str) -> Result<String, ScrapeError> {
    info!("searching {:?} on {}", query, site);
    let output = Command::new("googler")
        .args(["-n", "1", "--np", "-w", site, "--json", query])
        .output()
        .map_err(|e| ScrapeError::Search(format!("failed to run googler: {}", e)))?;

    if !output.status.success() {
        return Err(ScrapeError::Search(format!(
            "googler exited with {}",
            output.status
        )));
    }

    top_hit(&output.stdout)
}

/// Parse the JSON hit list and return the top url, percent-decoded.
fn top_hit(json: &[u8]) -> Result<String, ScrapeError> {
    let hits: Vec<SearchHit> = serde_json::from_slice(json)?;
    let Some(hit) = hits.first() else {
        return Ok(String::new());
    };
    Ok(urlencoding::decode(&hit.url)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| hit.url.clone()))
}
