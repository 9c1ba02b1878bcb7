//! The movie record built up over one scrape run
//!
//! Scalar fields follow a write-once discipline: the first infobox row
//! that matches a field wins and later rows are ignored. The merge with
//! the catalog page happens once, after which the output file name is
//! fixed.

use crate::lexicon::FieldTag;

/// Whether the page describes a feature film or a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Kind {
    #[default]
    Movie,
    Series,
}

impl Kind {
    /// Tag form used in the rendered note.
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Movie => "movie",
            Kind::Series => "serial",
        }
    }
}

/// The three source pages. An empty string means the lookup for that
/// site found nothing, which is a normal outcome.
#[derive(Debug, Clone, Default)]
pub struct SourceUrls {
    pub encyclopedia: String,
    pub catalog_a: String,
    pub catalog_b: String,
}

#[derive(Debug, Clone, Default)]
pub struct MovieRecord {
    pub kind: Kind,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub poster_url: Option<String>,
    pub year: Option<String>,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub producers: Vec<String>,
    pub screenwriters: Vec<String>,
    pub companies: Vec<String>,
    pub countries: Vec<String>,
    pub synopsis: String,
    pub sources: SourceUrls,
    /// Computed once by `merge`, never mutated afterwards.
    pub file_name: String,
}

/// Write-once assignment: keeps the first non-empty value, ignores the
/// rest. Makes the first-match-wins policy visible at the call site.
pub fn set_if_absent(slot: &mut Option<String>, value: String) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value);
    }
}

impl MovieRecord {
    /// Merge catalog-page data into the encyclopedia record.
    ///
    /// The synopsis always comes from the catalog (the encyclopedia page
    /// does not carry one). The catalog poster only fills in when the
    /// encyclopedia had none. Source urls are assigned verbatim.
    pub fn merge(&mut self, synopsis: String, poster: String, sources: SourceUrls) {
        self.synopsis = synopsis;
        if self.poster_url.is_none() && !poster.is_empty() {
            self.poster_url = Some(poster);
        }
        self.sources = sources;
        self.file_name = self.computed_file_name();
    }

    /// `<original title> (<year>).md`, falling back to the display title
    /// when the page had no original-title row.
    fn computed_file_name(&self) -> String {
        let name = self
            .original_title
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or(self.title.as_deref())
            .unwrap_or("")
            .trim();
        format!("{} ({}).md", name, self.year.as_deref().unwrap_or(""))
    }

    /// The list field a classified row populates, if it is list-valued.
    pub fn list_field(&mut self, tag: FieldTag) -> Option<&mut Vec<String>> {
        match tag {
            FieldTag::Genre => Some(&mut self.genres),
            FieldTag::Director => Some(&mut self.directors),
            FieldTag::Producer => Some(&mut self.producers),
            FieldTag::Screenwriter => Some(&mut self.screenwriters),
            FieldTag::Company => Some(&mut self.companies),
            FieldTag::Country => Some(&mut self.countries),
            FieldTag::Year | FieldTag::SeasonCount => None,
        }
    }
}
