//! The selection set: books the user has marked for export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::book::Book;
use crate::error::Result;

/// An ordered set of books accumulated during the session.
///
/// Grows only by explicit user action and never removes. Uniqueness is
/// not enforced: selecting the same book twice keeps both entries, and
/// duplicate titles in the export file are acceptable.
#[derive(Debug, Default)]
pub struct Selection {
    books: Vec<Arc<Book>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book handle obtained from the catalog.
    pub fn add(&mut self, book: Arc<Book>) {
        self.books.push(book);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Titles in selection order (the order the user picked them).
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.books.iter().map(|b| b.title.as_str())
    }

    /// Write one title per line to `dest`, sorted ascending.
    ///
    /// Sorts a snapshot, so the live selection order is untouched. An
    /// empty selection writes nothing and succeeds.
    pub fn export_sorted<W: Write>(&self, dest: &mut W) -> Result<()> {
        let mut titles: Vec<&str> = self.books.iter().map(|b| b.title.as_str()).collect();
        titles.sort_unstable();

        for title in titles {
            writeln!(dest, "{title}")?;
        }
        Ok(())
    }

    /// Open `path` for writing and export the sorted titles into it.
    pub fn export_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.export_sorted(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
