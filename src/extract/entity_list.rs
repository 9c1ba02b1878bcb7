//! Heuristic parser for multi-name infobox cells
//!
//! One cell can carry several people or companies, separated by raw
//! `<br/>` line breaks inside the cell rather than by separate rows,
//! with anchor markup, citation brackets and mixed punctuation thrown
//! in. The parser normalizes all of that into an ordered list of
//! proper-noun strings.

use scraper::Html;

/// Punctuation class splitting one text run into candidate names.
/// Brackets cover citation markers like `[3]`.
const SEPARATORS: &[char] = &[';', ',', ':', '[', ']'];

/// Split a cell's inner markup into proper-noun entries.
///
/// Each `<br/>`-separated segment is parsed as an HTML fragment and
/// reduced to its visible text; the text is split on the separator
/// class, tokens are trimmed of spaces and tabs, and a token survives
/// only when its first character is uppercase by Unicode rules. The
/// uppercase filter deliberately trades recall for precision: stray
/// lowercase fragments left over from citations and prepositions are far
/// more common in practice than legitimate lowercase-prefixed names.
///
/// Order is preserved and duplicates are kept. Empty input yields an
/// empty list.
pub fn parse_entity_list(inner_html: &str) -> Vec<String> {
    let mut entries = Vec::new();
    // Both serializations occur: raw wiki markup writes `<br/>`, the
    // html5ever serializer re-emits void elements as `<br>`.
    for chunk in inner_html.split("<br/>") {
        for segment in chunk.split("<br>") {
            collect_entities(segment, &mut entries);
        }
    }
    entries
}

fn collect_entities(segment: &str, entries: &mut Vec<String>) {
    let fragment = Html::parse_fragment(segment);
    let text = fragment.root_element().text().collect::<String>();
    for token in text.split(SEPARATORS) {
        let token = token.trim_matches(|c| c == ' ' || c == '\t');
        if token.is_empty() {
            continue;
        }
        if token.chars().next().is_some_and(char::is_uppercase) {
            entries.push(token.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_drops_lowercase_tokens() {
        let entries = parse_entity_list("Иван Петров, иван, Студия «Рекорд»");
        assert_eq!(entries, vec!["Иван Петров", "Студия «Рекорд»"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert_eq!(parse_entity_list(""), Vec::<String>::new());
    }

    #[test]
    fn splits_on_line_breaks_and_strips_markup() {
        let html = r#"<a href="/wiki/X">Дэвид Хэнд</a><br/><span>Уильям Коттрелл</span>[3]"#;
        assert_eq!(
            parse_entity_list(html),
            vec!["Дэвид Хэнд", "Уильям Коттрелл"]
        );
    }

    #[test]
    fn splits_on_reserialized_line_breaks() {
        // scraper's inner_html() emits void elements without the slash.
        let html = "Дэвид Хэнд<br>Уильям Коттрелл";
        assert_eq!(
            parse_entity_list(html),
            vec!["Дэвид Хэнд", "Уильям Коттрелл"]
        );
    }

    #[test]
    fn handles_mixed_separators() {
        let entries = parse_entity_list("Walt Disney; Pixar: RKO [Radio Pictures]");
        assert_eq!(entries, vec!["Walt Disney", "Pixar", "RKO", "Radio Pictures"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let entries = parse_entity_list("Джон Смит, Анна Ли, Джон Смит");
        assert_eq!(entries, vec!["Джон Смит", "Анна Ли", "Джон Смит"]);
    }

    #[test]
    fn idempotent_over_its_own_output() {
        let first = parse_entity_list("Иван Петров, иван, Студия «Рекорд»");
        let rejoined = first.join(", ");
        assert_eq!(parse_entity_list(&rejoined), first);
    }
}
