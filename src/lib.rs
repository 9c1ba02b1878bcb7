//! Movie note scraper
//!
//! Resolves a free-text movie title into encyclopedia and catalog pages,
//! extracts structured metadata from the encyclopedia infobox, merges in
//! the catalog synopsis and poster, and renders a markdown note.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod lexicon;
pub mod note;
pub mod pipeline;
pub mod record;
pub mod search;

pub use error::ScrapeError;
pub use record::MovieRecord;
