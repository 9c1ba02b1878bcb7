//! CLI entry: scrape one query, show the record, confirm, write the note.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::error;

use cinenote::lexicon::Lexicon;
use cinenote::note;
use cinenote::pipeline::Scraper;
use cinenote::record::MovieRecord;

fn main() -> ExitCode {
    colog::init();

    let Some(query) = std::env::args().nth(1) else {
        eprintln!("usage: cinenote <movie title>");
        return ExitCode::from(2);
    };

    let scraper = Scraper::new(Lexicon::default());
    let record = match scraper.scrape_query(&query) {
        Ok(record) => record,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    print_record(&record);

    println!("=======");
    print!(
        "Save markdown file \"{}\"? (yes/no)> [yes] ",
        record.file_name
    );
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return ExitCode::FAILURE;
    }
    if matches!(answer.trim(), "" | "yes") {
        if let Err(e) = note::write(&record) {
            error!("failed to write \"{}\": {}", record.file_name, e);
            return ExitCode::FAILURE;
        }
        println!("file \"{}\" created", record.file_name);
    }
    ExitCode::SUCCESS
}

fn print_record(record: &MovieRecord) {
    println!("Name:           {}", record.title.as_deref().unwrap_or(""));
    println!(
        "Original Title: {}",
        record.original_title.as_deref().unwrap_or("")
    );
    println!(
        "Picture:        {}",
        record.poster_url.as_deref().unwrap_or("")
    );
    println!("Year:           {}", record.year.as_deref().unwrap_or(""));
    println!("Type:           {}", record.kind.tag());
    for genre in &record.genres {
        println!("Genre:          {}", genre);
    }
    for director in &record.directors {
        println!("Director:       {}", director);
    }
    for producer in &record.producers {
        println!("Producer:       {}", producer);
    }
    for screenwriter in &record.screenwriters {
        println!("Screenwriter:   {}", screenwriter);
    }
    for company in &record.companies {
        println!("Company:        {}", company);
    }
    for country in &record.countries {
        println!("Country:        {}", country);
    }
    println!("Wikipedia:      {}", record.sources.encyclopedia);
    println!("Kinopoisk:      {}", record.sources.catalog_a);
    println!("Mail:           {}", record.sources.catalog_b);
    println!("Summary:");
    println!("{}", record.synopsis);
}
