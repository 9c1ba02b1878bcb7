//! Row labels and term translations for the Russian-language encyclopedia
//!
//! The lexicon is an immutable value handed to the extractor at
//! construction, so tests can inject a minimal table instead of relying
//! on process-wide state. Unknown terms pass through unchanged with a
//! diagnostic; rendering never fails on them.

use std::collections::HashMap;

use log::warn;

/// Semantic meaning of one infobox row, derived from its header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTag {
    Genre,
    Director,
    Producer,
    Screenwriter,
    Company,
    Country,
    Year,
    /// A season-count row. Populates no field; its presence switches the
    /// whole record to `Kind::Series`.
    SeasonCount,
}

pub struct Lexicon {
    /// Exact header label -> field.
    labels: HashMap<String, FieldTag>,
    /// Label fragments that must all be present. Used for labels that
    /// vary in prefix/suffix across pages ("Автор сценария",
    /// "Авторы сценариев", ...).
    fragment_labels: Vec<(Vec<String>, FieldTag)>,
    /// Source-language genre and country terms -> English form.
    translations: HashMap<String, String>,
    /// Genre link text dropped outright instead of translated.
    skipped_genres: Vec<String>,
}

impl Lexicon {
    pub fn new(
        labels: HashMap<String, FieldTag>,
        fragment_labels: Vec<(Vec<String>, FieldTag)>,
        translations: HashMap<String, String>,
        skipped_genres: Vec<String>,
    ) -> Self {
        Self {
            labels,
            fragment_labels,
            translations,
            skipped_genres,
        }
    }

    /// The built-in table for Russian Wikipedia infoboxes.
    pub fn russian() -> Self {
        let labels = [
            ("Жанр", FieldTag::Genre),
            ("Режиссёр", FieldTag::Director),
            ("Продюсер", FieldTag::Producer),
            ("Кинокомпания", FieldTag::Company),
            ("Студия", FieldTag::Company),
            ("Страна", FieldTag::Country),
            ("Год", FieldTag::Year),
            ("Премьера", FieldTag::Year),
            ("На экранах", FieldTag::Year),
            ("Сезонов", FieldTag::SeasonCount),
        ]
        .into_iter()
        .map(|(label, tag)| (label.to_string(), tag))
        .collect();

        let fragment_labels = vec![(
            vec!["Автор".to_string(), "сценария".to_string()],
            FieldTag::Screenwriter,
        )];

        let translations = [
            ("Канада", "Canada"),
            ("СССР", "USSR"),
            ("США", "USA"),
            ("детектив", "detective"),
            ("драма", "drama"),
            ("комедия", "comedy"),
            ("мелодрама", "melodrama"),
            ("мультфильм", "cartoon"),
            ("мюзикл", "musical"),
            ("научная фантастика", "science fiction"),
            ("приключение", "adventures"),
            ("приключения", "adventures"),
            ("семейный", "family"),
            ("сказка", "fairy tale"),
            ("стимпанк", "steampunk"),
            ("фэнтези", "fantasy"),
            ("экранизация", "film adaptation"),
            ("юридический триллер", "legal thriller"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

        // A meta-tag on the encyclopedia side, not an actual genre.
        let skipped_genres = vec!["экранизация".to_string()];

        Self::new(labels, fragment_labels, translations, skipped_genres)
    }

    /// Map a row's header text to a field. Exact matches first, then the
    /// fragment-conjunction labels. Unmatched labels are simply ignored
    /// by the caller; pages carry many rows that are never extracted.
    pub fn classify(&self, label: &str) -> Option<FieldTag> {
        if let Some(tag) = self.labels.get(label) {
            return Some(*tag);
        }
        self.fragment_labels
            .iter()
            .find(|(fragments, _)| fragments.iter().all(|f| label.contains(f.as_str())))
            .map(|(_, tag)| *tag)
    }

    /// `english|original` composite tag for known terms. Unknown terms
    /// pass through unchanged with a console diagnostic.
    pub fn translate(&self, term: &str) -> String {
        match self.translations.get(term) {
            Some(translated) => format!("{}|{}", translated, term),
            None => {
                warn!("can't translate: {}", term);
                term.to_string()
            }
        }
    }

    pub fn is_skipped_genre(&self, text: &str) -> bool {
        self.skipped_genres.iter().any(|g| g == text)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::russian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_exact_labels() {
        let lexicon = Lexicon::russian();
        assert_eq!(lexicon.classify("Жанр"), Some(FieldTag::Genre));
        assert_eq!(lexicon.classify("Режиссёр"), Some(FieldTag::Director));
        assert_eq!(lexicon.classify("Студия"), Some(FieldTag::Company));
        assert_eq!(lexicon.classify("Премьера"), Some(FieldTag::Year));
        assert_eq!(lexicon.classify("Сезонов"), Some(FieldTag::SeasonCount));
    }

    #[test]
    fn classifies_screenwriter_label_variants() {
        let lexicon = Lexicon::russian();
        assert_eq!(
            lexicon.classify("Автор сценария"),
            Some(FieldTag::Screenwriter)
        );
        assert_eq!(
            lexicon.classify("Авторы сценария"),
            Some(FieldTag::Screenwriter)
        );
        // Both fragments are required.
        assert_eq!(lexicon.classify("Автор музыки"), None);
    }

    #[test]
    fn ignores_unknown_labels() {
        let lexicon = Lexicon::russian();
        assert_eq!(lexicon.classify("Оператор"), None);
        assert_eq!(lexicon.classify(""), None);
    }

    #[test]
    fn translates_known_terms_to_composite_tags() {
        let lexicon = Lexicon::russian();
        assert_eq!(lexicon.translate("драма"), "drama|драма");
        assert_eq!(lexicon.translate("США"), "USA|США");
    }

    #[test]
    fn unknown_terms_pass_through_unchanged() {
        let lexicon = Lexicon::russian();
        assert_eq!(lexicon.translate("unknown-term"), "unknown-term");
    }

    #[test]
    fn minimal_table_can_be_injected() {
        let labels = [("Genre".to_string(), FieldTag::Genre)].into_iter().collect();
        let translations = [("драма".to_string(), "drama".to_string())]
            .into_iter()
            .collect();
        let lexicon = Lexicon::new(labels, Vec::new(), translations, Vec::new());
        assert_eq!(lexicon.classify("Genre"), Some(FieldTag::Genre));
        assert_eq!(lexicon.classify("Жанр"), None);
        assert_eq!(lexicon.translate("драма"), "drama|драма");
    }

    #[test]
    fn film_adaptation_is_skipped_not_translated() {
        let lexicon = Lexicon::russian();
        assert!(lexicon.is_skipped_genre("экранизация"));
        assert!(!lexicon.is_skipped_genre("драма"));
    }
}
