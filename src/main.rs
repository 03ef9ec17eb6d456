//! bookshelf - interactive console catalog for a personal reading list

use std::io::{self, IsTerminal as _, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use bookshelf::{Catalog, Session, SessionConfig, SortKey, SystemOpener, load_catalog};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version, about = "Browse, search, and curate a book list", long_about = None)]
#[command(after_help = "EXAMPLES:
    bookshelf                             Load TestData/books.json
    bookshelf mybooks.json --sort year    Sort option orders by publication year
    bookshelf -o picks.txt                Write the selection to picks.txt")]
struct Cli {
    /// Book list to load (JSON array of records)
    #[arg(value_name = "DATA", default_value = "TestData/books.json")]
    data: PathBuf,

    /// File the selection is written to when the session ends
    #[arg(short, long, default_value = "selected_books.txt")]
    output: PathBuf,

    /// Key the "sort catalog" menu option orders by
    #[arg(long, value_enum, default_value_t = SortKey::Language)]
    sort: SortKey,

    /// Don't print the loaded records at startup
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> bookshelf::Result<()> {
    // Best effort: a missing or unparseable file is reported and the
    // session starts with an empty catalog instead of aborting.
    let mut catalog = match load_catalog(&cli.data) {
        Ok(outcome) => {
            for problem in &outcome.problems {
                warn!(
                    index = problem.index,
                    reason = %problem.reason,
                    "skipped malformed record"
                );
            }
            outcome.catalog
        }
        Err(err) => {
            eprintln!("error loading {}: {err}", cli.data.display());
            Catalog::new()
        }
    };

    if !cli.quiet {
        dump_records(&catalog, &mut io::stdout())?;
    }

    let config = SessionConfig {
        output_path: cli.output,
        sort_key: cli.sort,
    };
    let opener = SystemOpener;
    let stdin = io::stdin();

    Session::new(&mut catalog, config, &opener, stdin.lock(), io::stdout()).run()
}

/// Print every loaded record, one block per book.
fn dump_records(catalog: &Catalog, out: &mut impl Write) -> bookshelf::Result<()> {
    for book in catalog.iter() {
        writeln!(out, "Title: {}", book.title)?;
        writeln!(out, "Author: {}", book.author.name)?;
        writeln!(out, "Language: {}", book.language)?;
        writeln!(out, "Link: {}", book.link)?;
        if let Some(ref country) = book.country {
            writeln!(out, "Country: {country}")?;
        }
        if let Some(ref image_link) = book.image_link {
            writeln!(out, "Image Link: {image_link}")?;
        }
        if let Some(pages) = book.pages {
            writeln!(out, "Pages: {pages}")?;
        }
        if let Some(year) = book.year {
            writeln!(out, "Year: {year}")?;
        }
        writeln!(out, "-----------------------------")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::Book;

    #[test]
    fn test_dump_records_prints_every_field() {
        let mut catalog = Catalog::new();
        catalog.add(
            Book::new(
                "Things Fall Apart",
                "Chinua Achebe",
                "https://example.com/tfa",
                "English",
            )
            .with_country("Nigeria")
            .with_image_link("images/things-fall-apart.jpg")
            .with_pages(209)
            .with_year(1958),
        );
        catalog.add(Book::new("T", "A", "", "En"));

        let mut out = Vec::new();
        dump_records(&catalog, &mut out).unwrap();
        let dump = String::from_utf8(out).unwrap();

        assert!(dump.contains("Country: Nigeria"));
        assert!(dump.contains("Image Link: images/things-fall-apart.jpg"));
        assert!(dump.contains("Pages: 209"));
        assert!(dump.contains("Year: 1958"));
        // Optional lines are omitted for the bare record
        assert_eq!(dump.matches("Image Link:").count(), 1);
        assert_eq!(dump.matches("Title:").count(), 2);
    }
}
