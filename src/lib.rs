//! # bookshelf
//!
//! An in-memory catalog for a personal reading list, plus the interactive
//! console session that browses it.
//!
//! Books are loaded once from a JSON file, held in load order, and queried
//! with plain linear scans. The user pages through the catalog, searches by
//! author, language, or title, opens a book's link with the OS default
//! handler, and the books they mark along the way are written to a text
//! file when the session ends.
//!
//! ## Quick Start
//!
//! ```
//! use bookshelf::{Book, Catalog, Selection};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Beloved", "Toni Morrison", "", "English"));
//! catalog.add(Book::new("Bleak House", "Charles Dickens", "", "English"));
//!
//! let hits = catalog.find_by_language("English");
//! assert_eq!(hits.len(), 2);
//!
//! let mut selection = Selection::new();
//! selection.add(catalog.share(0).unwrap());
//!
//! let mut out = Vec::new();
//! selection.export_sorted(&mut out).unwrap();
//! assert_eq!(out, b"Beloved\n");
//! ```

pub mod book;
pub mod catalog;
pub mod error;
pub mod load;
pub mod opener;
pub mod selection;
pub mod session;

pub use book::{Author, Book, SortKey};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use load::{BookRecord, LoadOutcome, LoadProblem, load_catalog, load_catalog_from_str};
pub use opener::{LinkOpener, SystemOpener};
pub use selection::Selection;
pub use session::{Session, SessionConfig};
