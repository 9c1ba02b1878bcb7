//! Markdown note rendering
//!
//! Fixed Obsidian-style layout: metadata header, poster, bold key/value
//! lines, wiki-link lists, source links, then section headings left
//! empty for manual completion. Rendering tolerates an all-empty record.

use std::fmt::Write as _;
use std::fs;

use chrono::Local;

use crate::record::MovieRecord;

/// Render the note with the current local timestamp.
pub fn render(record: &MovieRecord) -> String {
    render_at(record, &Local::now().format("%Y-%m-%d %H:%M").to_string())
}

/// Write the note to `record.file_name` in the working directory.
pub fn write(record: &MovieRecord) -> std::io::Result<()> {
    fs::write(&record.file_name, render(record))
}

fn render_at(record: &MovieRecord, created: &str) -> String {
    let title = record.title.as_deref().unwrap_or("");
    let year = record.year.as_deref().unwrap_or("");
    let mut out = String::new();

    let _ = writeln!(out, "---");
    let _ = writeln!(out, "created: {}", created);
    let _ = writeln!(out, "alias: \"{} ({})\"", title, year);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "<div style=\"float:right; padding: 10px\"><img width=200px src=\"{}\"/></div>",
        record.poster_url.as_deref().unwrap_or("")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "![[movie-beginning.png|50]]");
    let _ = writeln!(out, "# {}", title);

    let _ = writeln!(
        out,
        "**original name:** {}",
        record.original_title.as_deref().unwrap_or("")
    );
    let _ = writeln!(out, "**year:** #y{}", year);
    let _ = writeln!(out, "**type:** #{}", record.kind.tag());
    let _ = writeln!(out, "**status:** #inbox");
    let _ = writeln!(out, "**rate:**");

    write_list(&mut out, "**director:**", &record.directors);
    write_list(&mut out, "**producer:**", &record.producers);
    write_list(&mut out, "**screenwriter:**", &record.screenwriters);
    write_list(&mut out, "**company:**", &record.companies);
    write_list(&mut out, "**country:**", &record.countries);
    write_list(&mut out, "**tags:**", &record.genres);

    let _ = writeln!(out, "**[wikipedia]({})**", record.sources.encyclopedia);
    let _ = writeln!(out, "**[kinopoisk]({})**", record.sources.catalog_a);
    let _ = writeln!(out, "**[kino.mail]({})**", record.sources.catalog_b);

    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);

    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out, "{}", record.synopsis);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Review");
    let _ = writeln!(out);
    let _ = writeln!(out, "## What attracted attention");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Who might be interested");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Links");
    let _ = writeln!(out);

    out
}

/// One `**label:** [[a]] [[b]]` line; empty lists render nothing.
fn write_list(out: &mut String, label: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    let links: Vec<String> = entries.iter().map(|e| format!("[[{}]]", e)).collect();
    let _ = writeln!(out, "{} {}", label, links.join(" "));
}
