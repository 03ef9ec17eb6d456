//! Loading the catalog from a JSON book list.
//!
//! The data file is an array of records. Records are validated one at a
//! time: a malformed entry is skipped and reported in the outcome instead
//! of failing the whole load, so a partially bad file still yields a
//! usable catalog.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::book::Book;
use crate::catalog::Catalog;
use crate::error::Result;

/// One entry as found in the data file, prior to validation.
///
/// `title`, `author`, `link`, and `language` are required; the remaining
/// fields only appear in some data sets.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub link: String,
    pub language: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, rename = "imageLink")]
    pub image_link: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        let mut book = Book::new(record.title, record.author, record.link, record.language);
        book.country = record.country;
        book.image_link = record.image_link;
        book.pages = record.pages;
        book.year = record.year;
        book
    }
}

/// A record that failed validation and was left out of the catalog.
#[derive(Debug, Clone)]
pub struct LoadProblem {
    /// Position of the record in the source array.
    pub index: usize,
    pub reason: String,
}

/// Result of loading a book list: the catalog built from the well-formed
/// records, plus one problem per skipped record.
#[derive(Debug)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub problems: Vec<LoadProblem>,
}

/// Load a catalog from a JSON file containing an array of book records.
///
/// A missing or unreadable file, or a top-level value that is not an
/// array, is an error. Malformed records inside the array are skipped and
/// reported via [`LoadOutcome::problems`].
pub fn load_catalog(path: impl AsRef<Path>) -> Result<LoadOutcome> {
    let data = fs::read_to_string(path)?;
    load_catalog_from_str(&data)
}

/// Same as [`load_catalog`], but from an in-memory JSON string.
pub fn load_catalog_from_str(data: &str) -> Result<LoadOutcome> {
    // Parse the array shape first, then validate each element on its own
    // so one bad record produces one problem rather than a parse fault for
    // the whole file.
    let values: Vec<serde_json::Value> = serde_json::from_str(data)?;

    let mut catalog = Catalog::new();
    let mut problems = Vec::new();

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<BookRecord>(value) {
            Ok(record) => {
                catalog.add(record.into());
            }
            Err(err) => {
                warn!(index, error = %err, "skipping malformed book record");
                problems.push(LoadProblem {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(LoadOutcome { catalog, problems })
}
