//! Catalog page extraction: synopsis paragraph and fallback poster

use scraper::{Html, Selector};

/// What the catalog movie page contributes to the final record.
#[derive(Debug, Clone, Default)]
pub struct CatalogPage {
    pub synopsis: String,
    pub poster_url: String,
}

/// Pull the synopsis text and poster image from a catalog movie page.
/// Both stay empty when the page carries neither; that is not an error.
pub fn extract_catalog(document: &Html) -> CatalogPage {
    let synopsis_sel = Selector::parse("div.p-movie-info__content p").unwrap();
    let poster_sel = Selector::parse("div.p-movie-info img.p-picture__image[src]").unwrap();

    let synopsis = document
        .select(&synopsis_sel)
        .last()
        .map(|p| p.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let poster_url = document
        .select(&poster_sel)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default()
        .to_string();

    CatalogPage {
        synopsis,
        poster_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_synopsis_and_poster() {
        let html = r#"
        <div class="p-movie-info">
          <img class="p-picture__image" src="https://catalog.example/poster.jpg"/>
          <div class="p-movie-info__content">
            <p>Юная принцесса скрывается в лесу у семи гномов.</p>
          </div>
        </div>
        "#;
        let page = extract_catalog(&Html::parse_document(html));
        assert_eq!(page.synopsis, "Юная принцесса скрывается в лесу у семи гномов.");
        assert_eq!(page.poster_url, "https://catalog.example/poster.jpg");
    }

    #[test]
    fn missing_content_yields_empty_fields() {
        let page = extract_catalog(&Html::parse_document("<html><body></body></html>"));
        assert_eq!(page.synopsis, "");
        assert_eq!(page.poster_url, "");
    }

    #[test]
    fn last_paragraph_wins() {
        let html = r#"
        <div class="p-movie-info">
          <div class="p-movie-info__content">
            <p>Первый абзац.</p>
            <p>Второй абзац.</p>
          </div>
        </div>
        "#;
        let page = extract_catalog(&Html::parse_document(html));
        assert_eq!(page.synopsis, "Второй абзац.");
    }
}
