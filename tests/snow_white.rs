//! Offline end-to-end: infobox fixture -> record -> merge -> note.

use scraper::Html;

use cinenote::extract::{extract_catalog, InfoboxExtractor};
use cinenote::note;
use cinenote::record::{Kind, SourceUrls};

const ENCYCLOPEDIA_PAGE: &str = r#"
<html><body>
<table class="infobox">
  <tbody>
    <tr><th colspan="2">Белоснежка и семь гномов</th></tr>
    <tr><td colspan="2">англ. Snow White and the Seven Dwarfs</td></tr>
    <tr><td colspan="2" class="infobox-image">
      <a href="/wiki/File:Poster.jpg"><img srcset="//upload.example.org/poster.jpg 1.5x"/></a>
    </td></tr>
    <tr><th>Жанр</th><td>
      <a href="/wiki/cartoon">мультфильм</a>
      <a href="/wiki/tale">сказка</a>
      <a href="/wiki/adaptation">экранизация</a>
    </td></tr>
    <tr><th>Режиссёр</th><td><span>Дэвид Хэнд<br/>Уильям Коттрелл</span></td></tr>
    <tr><th>Продюсер</th><td><span><a href="/wiki/Disney">Уолт Дисней</a></span></td></tr>
    <tr><th>Автор сценария</th><td><span>Тед Сирс, Отто Инглэндер</span></td></tr>
    <tr><th>Кинокомпания</th><td><span>Walt Disney Productions</span></td></tr>
    <tr><th>Страна</th><td><a href="/wiki/USA">США</a></td></tr>
    <tr><th>Год</th><td><a href="/wiki/1937">1937</a></td></tr>
  </tbody>
</table>
</body></html>
"#;

const CATALOG_PAGE: &str = r#"
<html><body>
<div class="p-movie-info">
  <img class="p-picture__image" src="https://catalog.example/fallback.jpg"/>
  <div class="p-movie-info__content">
    <p>Юная принцесса скрывается в лесу у семи гномов.</p>
  </div>
</div>
</body></html>
"#;

#[test]
fn full_scrape_produces_the_expected_note() {
    let extractor = InfoboxExtractor::default();
    let document = Html::parse_document(ENCYCLOPEDIA_PAGE);
    let mut record = extractor.extract(&document, "https://ru.wikipedia.org/wiki/Белоснежка");

    let catalog = extract_catalog(&Html::parse_document(CATALOG_PAGE));
    record.merge(
        catalog.synopsis,
        catalog.poster_url,
        SourceUrls {
            encyclopedia: "https://ru.wikipedia.org/wiki/Белоснежка".to_string(),
            catalog_a: "https://www.kinopoisk.ru/film/1/".to_string(),
            catalog_b: "https://kino.mail.ru/cinema/movies/1/".to_string(),
        },
    );

    assert_eq!(record.kind, Kind::Movie);
    assert_eq!(record.title.as_deref(), Some("Белоснежка и семь гномов"));
    assert_eq!(
        record.original_title.as_deref(),
        Some("Snow White and the Seven Dwarfs")
    );
    // The encyclopedia poster wins over the catalog fallback.
    assert_eq!(
        record.poster_url.as_deref(),
        Some("https://upload.example.org/poster.jpg")
    );
    assert_eq!(record.year.as_deref(), Some("1937"));
    assert_eq!(record.genres, vec!["cartoon|мультфильм", "fairy tale|сказка"]);
    assert_eq!(record.directors, vec!["Дэвид Хэнд", "Уильям Коттрелл"]);
    assert_eq!(record.producers, vec!["Уолт Дисней"]);
    assert_eq!(record.screenwriters, vec!["Тед Сирс", "Отто Инглэндер"]);
    assert_eq!(record.companies, vec!["Walt Disney Productions"]);
    assert_eq!(record.countries, vec!["USA|США"]);
    assert_eq!(record.synopsis, "Юная принцесса скрывается в лесу у семи гномов.");
    assert_eq!(record.file_name, "Snow White and the Seven Dwarfs (1937).md");

    let note = note::render(&record);
    assert!(note.contains("# Белоснежка и семь гномов"));
    assert!(note.contains("**original name:** Snow White and the Seven Dwarfs"));
    assert!(note.contains("**tags:** [[cartoon|мультфильм]] [[fairy tale|сказка]]"));
    assert!(note.contains("**[kino.mail](https://kino.mail.ru/cinema/movies/1/)**"));
    assert!(note.contains("## Summary\nЮная принцесса скрывается в лесу у семи гномов."));
}

#[test]
fn missing_infobox_degrades_to_an_empty_record() {
    let extractor = InfoboxExtractor::default();
    let document = Html::parse_document("<html><body><p>страница без карточки</p></body></html>");
    let mut record = extractor.extract(&document, "https://ru.wikipedia.org/wiki/Нет");

    let catalog = extract_catalog(&Html::parse_document(CATALOG_PAGE));
    record.merge(catalog.synopsis, catalog.poster_url, SourceUrls::default());

    assert_eq!(record.title, None);
    // The catalog poster fills in when the encyclopedia had none.
    assert_eq!(
        record.poster_url.as_deref(),
        Some("https://catalog.example/fallback.jpg")
    );
    assert_eq!(record.file_name, " ().md");
    // Rendering still works; nothing panics on absent fields.
    let note = note::render(&record);
    assert!(note.contains("## Summary\nЮная принцесса скрывается в лесу у семи гномов."));
}
