//! Infobox extraction
//!
//! Walks every row of the encyclopedia infobox, classifies its header
//! label through the lexicon and applies the matching rule from a fixed
//! rule table. All fields are write-once: the first row that matches a
//! field wins and later rows with the same label are ignored.
//!
//! Extraction never fails. A page without an infobox yields an
//! otherwise-empty record, which callers treat as a soft "not found".

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::extract::parse_entity_list;
use crate::lexicon::{FieldTag, Lexicon};
use crate::record::{set_if_absent, Kind, MovieRecord};

/// How the data cells of a classified row become field values.
#[derive(Debug, Clone, Copy)]
enum CellRule {
    /// Entity list parser over the first matching block's inner markup.
    NameList,
    /// Every matching link's text, translated through the lexicon.
    /// Citation markers (`[`-prefixed) and skipped genre terms drop out.
    TranslatedLinks,
    /// First 4-digit run across matching anchors, in document order.
    /// No plausibility bounds: a 4-digit runtime would match too. Known
    /// risk, kept as-is.
    YearScan,
}

/// One entry of the extraction rule table: which field, which cells
/// inside the row, and how to read them.
struct RowRule {
    tag: FieldTag,
    cells: Selector,
    rule: CellRule,
}

pub struct InfoboxExtractor {
    lexicon: Lexicon,
    rules: Vec<RowRule>,
    rows: Selector,
    header: Selector,
    title_row: Selector,
    original_title_row: Selector,
    poster: Selector,
    year: Regex,
}

impl InfoboxExtractor {
    pub fn new(lexicon: Lexicon) -> Self {
        let rule = |tag, cells: &str, rule| RowRule {
            tag,
            cells: Selector::parse(cells).unwrap(),
            rule,
        };
        let rules = vec![
            rule(FieldTag::Genre, "td a[href]", CellRule::TranslatedLinks),
            rule(FieldTag::Director, "td span", CellRule::NameList),
            rule(FieldTag::Producer, "td span", CellRule::NameList),
            rule(FieldTag::Screenwriter, "td span", CellRule::NameList),
            rule(FieldTag::Company, "td span", CellRule::NameList),
            rule(FieldTag::Country, "td a", CellRule::TranslatedLinks),
            rule(FieldTag::Year, "td a", CellRule::YearScan),
        ];

        Self {
            lexicon,
            rules,
            rows: Selector::parse(".infobox tbody tr").unwrap(),
            header: Selector::parse("th").unwrap(),
            title_row: Selector::parse(".infobox tbody tr:nth-child(1)").unwrap(),
            original_title_row: Selector::parse(".infobox tbody tr:nth-child(2)").unwrap(),
            poster: Selector::parse(".infobox-image a img[srcset]").unwrap(),
            year: Regex::new("[0-9][0-9][0-9][0-9]").unwrap(),
        }
    }

    /// Build a partial record from one encyclopedia page. Synopsis and
    /// the catalog urls are merged in later.
    pub fn extract(&self, document: &Html, origin_url: &str) -> MovieRecord {
        let mut record = MovieRecord::default();
        record.sources.encyclopedia = origin_url.to_string();

        let rows: Vec<ElementRef> = document.select(&self.rows).collect();

        // Kind is settled over all rows up front so field extraction
        // never depends on where the season-count row happens to sit.
        if rows
            .iter()
            .filter_map(|row| self.row_label(row))
            .any(|label| self.lexicon.classify(&label) == Some(FieldTag::SeasonCount))
        {
            record.kind = Kind::Series;
        }

        self.extract_titles(document, &mut record);
        self.extract_poster(document, &mut record);

        for row in &rows {
            let Some(label) = self.row_label(row) else {
                continue;
            };
            let Some(tag) = self.lexicon.classify(&label) else {
                continue;
            };
            if let Some(rule) = self.rules.iter().find(|r| r.tag == tag) {
                self.apply_rule(rule, *row, &mut record);
            }
        }

        record
    }

    fn row_label(&self, row: &ElementRef) -> Option<String> {
        row.select(&self.header)
            .next()
            .map(|th| th.text().collect::<String>().trim().to_string())
    }

    fn extract_titles(&self, document: &Html, record: &mut MovieRecord) {
        if let Some(row) = document.select(&self.title_row).next() {
            let text = row.text().collect::<String>();
            set_if_absent(&mut record.title, text.trim().to_string());
        }
        if let Some(row) = document.select(&self.original_title_row).next() {
            let text = row.text().collect::<String>();
            set_if_absent(&mut record.original_title, clean_original_title(&text));
        }
    }

    /// First `srcset` image wins. The attribute is percent-decoded and
    /// its first space-delimited candidate gets the scheme prefixed.
    fn extract_poster(&self, document: &Html, record: &mut MovieRecord) {
        let Some(img) = document.select(&self.poster).next() else {
            return;
        };
        let Some(srcset) = img.value().attr("srcset") else {
            return;
        };
        let decoded = urlencoding::decode(srcset)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| srcset.to_string());
        if let Some(candidate) = decoded.split(' ').next() {
            set_if_absent(&mut record.poster_url, format!("https:{}", candidate));
        }
    }

    fn apply_rule(&self, rule: &RowRule, row: ElementRef, record: &mut MovieRecord) {
        match rule.rule {
            CellRule::NameList => {
                let Some(field) = record.list_field(rule.tag) else {
                    return;
                };
                if !field.is_empty() {
                    return;
                }
                if let Some(block) = row.select(&rule.cells).next() {
                    *field = parse_entity_list(&block.inner_html());
                }
            }
            CellRule::TranslatedLinks => {
                let mut values = Vec::new();
                for link in row.select(&rule.cells) {
                    let text = link.text().collect::<String>();
                    let text = text.trim();
                    if text.is_empty()
                        || text.starts_with('[')
                        || self.lexicon.is_skipped_genre(text)
                    {
                        continue;
                    }
                    values.push(self.lexicon.translate(text));
                }
                let Some(field) = record.list_field(rule.tag) else {
                    return;
                };
                if field.is_empty() {
                    *field = values;
                }
            }
            CellRule::YearScan => {
                if record.year.is_some() {
                    return;
                }
                for anchor in row.select(&rule.cells) {
                    let text = anchor.text().collect::<String>();
                    if let Some(m) = self.year.find(&text) {
                        record.year = Some(m.as_str().to_string());
                        break;
                    }
                }
            }
        }
    }
}

impl Default for InfoboxExtractor {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

/// Normalize the original-title row: drop the language label, trim
/// leading punctuation, then move a leading English article to the end,
/// library-catalog style ("The Thing" -> "Thing, The"). At most one
/// inversion is performed.
fn clean_original_title(raw: &str) -> String {
    let s = raw.trim();
    let s = s.strip_prefix("англ.").unwrap_or(s);
    let mut s = trim_leading_non_alphanumeric(s).to_string();

    for article in ["A", "The"] {
        let Some(rest) = s.strip_prefix(article) else {
            continue;
        };
        if rest.chars().next().is_some_and(char::is_whitespace) {
            s = format!("{}, {}", trim_leading_non_alphanumeric(rest), article);
            break;
        }
    }
    s.trim().to_string()
}

fn trim_leading_non_alphanumeric(s: &str) -> &str {
    s.trim_start_matches(|c: char| !c.is_alphanumeric())
}
