//! Book records and their comparison semantics.

use std::cmp::Ordering;
use std::fmt;

/// A book's author.
///
/// The source data only ever carries a name, so this is a plain struct
/// rather than a person hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single catalog entry, immutable once constructed.
///
/// Equality is defined by title alone: two records sharing a title are
/// considered the same book even when every other field differs, which
/// models two editions of one title. Ordering is always by a single
/// [`SortKey`], never a multi-key comparison.
#[derive(Debug, Clone)]
pub struct Book {
    pub title: String,
    pub author: Author,
    /// May be empty; "no link available" is a valid state, not an error.
    pub link: String,
    pub language: String,
    pub country: Option<String>,
    pub image_link: Option<String>,
    pub pages: Option<u32>,
    pub year: Option<i32>,
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        link: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: Author::new(author),
            link: link.into(),
            language: language.into(),
            country: None,
            image_link: None,
            pages: None,
            year: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_image_link(mut self, image_link: impl Into<String>) -> Self {
        self.image_link = Some(image_link.into());
        self
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Whether this book has a link that can be opened.
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }

    /// Compare two books under the given key.
    ///
    /// Books without a `year` sort before any book that has one when the
    /// key is [`SortKey::Year`].
    pub fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Language => self.language.cmp(&other.language),
            SortKey::Year => self.year.cmp(&other.year),
            SortKey::Title => self.title.cmp(&other.title),
        }
    }
}

/// The single key a catalog sort compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortKey {
    #[default]
    Language,
    Year,
    Title,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Language => "language",
            SortKey::Year => "year",
            SortKey::Title => "title",
        };
        f.write_str(name)
    }
}
