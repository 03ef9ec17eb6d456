//! The in-memory catalog: load-order book storage and linear-scan queries.

use std::sync::Arc;

use crate::book::{Book, SortKey};
use crate::error::{Error, Result};

/// Insertion-ordered collection owning every book for the session.
///
/// Append-only during the load phase; read-only afterwards except for the
/// explicit in-place sort. Books are held behind [`Arc`] so query results
/// and the selection set keep valid handles across a sort instead of
/// dangling references into a reordered vec.
///
/// All queries are linear scans. A personal reading list is small enough
/// that an index would be machinery without payoff.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Arc<Book>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book, returning its current index.
    ///
    /// Duplicate titles are permitted to coexist (two editions sharing a
    /// title compare equal but are distinct entries).
    pub fn add(&mut self, book: Book) -> usize {
        self.books.push(Arc::new(book));
        self.books.len() - 1
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Bounds-checked access to the book at `index`.
    pub fn get(&self, index: usize) -> Result<&Book> {
        self.books
            .get(index)
            .map(Arc::as_ref)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.books.len(),
            })
    }

    /// A shared handle to the book at `index`, suitable for the selection
    /// set. The handle stays valid even if the catalog is later sorted.
    pub fn share(&self, index: usize) -> Result<Arc<Book>> {
        self.books.get(index).cloned().ok_or(Error::IndexOutOfRange {
            index,
            len: self.books.len(),
        })
    }

    /// Iterate books in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().map(Arc::as_ref)
    }

    /// Every book whose author name equals `name` exactly, in catalog
    /// order. Case-sensitive, no normalization, no partial matching.
    pub fn find_by_author(&self, name: &str) -> Vec<Arc<Book>> {
        self.books
            .iter()
            .filter(|b| b.author.name == name)
            .cloned()
            .collect()
    }

    /// Every book whose language equals `language` exactly, in catalog
    /// order. Same contract as [`Catalog::find_by_author`].
    pub fn find_by_language(&self, language: &str) -> Vec<Arc<Book>> {
        self.books
            .iter()
            .filter(|b| b.language == language)
            .cloned()
            .collect()
    }

    /// Index of the first book whose title equals `title` exactly.
    pub fn find_index_by_title(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|b| b.title == title)
    }

    /// Reorder the catalog by the given key.
    ///
    /// The sort is stable: books comparing equal under the key keep their
    /// relative load order, which also makes the operation idempotent.
    pub fn sort_in_place(&mut self, key: SortKey) {
        self.books.sort_by(|a, b| a.compare_by(b, key));
    }
}
