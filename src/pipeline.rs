//! End-to-end scrape: resolve three site urls, extract, merge
//!
//! Everything runs sequentially and blocking: each page fetch finishes
//! before the next begins, with a politeness pause in between. One
//! record is built per invocation and handed to the renderer.

use log::warn;

use crate::error::ScrapeError;
use crate::extract::{extract_catalog, InfoboxExtractor};
use crate::fetch::{politeness_pause, Fetcher};
use crate::lexicon::Lexicon;
use crate::record::{MovieRecord, SourceUrls};
use crate::search;

pub const ENCYCLOPEDIA_HOST: &str = "ru.wikipedia.org";
pub const CATALOG_A_HOST: &str = "kinopoisk.ru";
pub const CATALOG_B_HOST: &str = "kino.mail.ru";

pub struct Scraper {
    fetcher: Fetcher,
    extractor: InfoboxExtractor,
}

impl Scraper {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            fetcher: Fetcher::new(&[ENCYCLOPEDIA_HOST, CATALOG_A_HOST, CATALOG_B_HOST]),
            extractor: InfoboxExtractor::new(lexicon),
        }
    }

    /// Resolve a free-text title to the three source pages, then scrape.
    pub fn scrape_query(&self, query: &str) -> Result<MovieRecord, ScrapeError> {
        let encyclopedia = search::resolve(query, ENCYCLOPEDIA_HOST)?;
        politeness_pause();
        let catalog_a = search::resolve(query, CATALOG_A_HOST)?;
        politeness_pause();
        let catalog_b = search::resolve(query, CATALOG_B_HOST)?;
        politeness_pause();

        self.scrape_urls(SourceUrls {
            encyclopedia,
            catalog_a,
            catalog_b,
        })
    }

    /// Scrape pre-resolved urls. Unresolved slots (empty strings) are
    /// skipped; their fields stay absent rather than failing the run.
    /// The catalog-A url is cross-referenced in the note only, never
    /// fetched.
    pub fn scrape_urls(&self, sources: SourceUrls) -> Result<MovieRecord, ScrapeError> {
        let encyclopedia = urlencoding::decode(&sources.encyclopedia)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| sources.encyclopedia.clone());

        let mut record = if encyclopedia.is_empty() {
            warn!("no encyclopedia page resolved, record will be mostly empty");
            MovieRecord::default()
        } else {
            let document = self.fetcher.fetch(&encyclopedia)?;
            self.extractor.extract(&document, &encyclopedia)
        };

        let mut catalog = crate::extract::CatalogPage::default();
        if !sources.catalog_b.is_empty() {
            politeness_pause();
            let document = self.fetcher.fetch(&sources.catalog_b)?;
            catalog = extract_catalog(&document);
        }

        record.merge(
            catalog.synopsis,
            catalog.poster_url,
            SourceUrls {
                encyclopedia,
                catalog_a: sources.catalog_a,
                catalog_b: sources.catalog_b,
            },
        );
        Ok(record)
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}
