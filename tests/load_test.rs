//! Loading tests.
//!
//! Well-formed records populate the catalog; malformed records are skipped
//! and reported, never silently zero-filled.

use bookshelf::{Error, load_catalog, load_catalog_from_str};
use tempfile::TempDir;

// ============================================================================
// Well-Formed Input Tests
// ============================================================================

#[test]
fn test_round_trip_minimal_record() {
    let outcome = load_catalog_from_str(
        r#"[{"title": "T", "author": "A", "link": "L", "language": "En"}]"#,
    )
    .expect("Failed to load records");

    assert_eq!(outcome.catalog.len(), 1);
    assert!(outcome.problems.is_empty());

    let book = outcome.catalog.get(0).unwrap();
    assert_eq!(book.title, "T");
    assert_eq!(book.author.name, "A");
    assert_eq!(book.link, "L");
    assert_eq!(book.language, "En");
    assert_eq!(book.country, None);
    assert_eq!(book.year, None);
}

#[test]
fn test_optional_fields_parsed() {
    let outcome = load_catalog_from_str(
        r#"[{
            "title": "Wuthering Heights",
            "author": "Emily Brontë",
            "link": "https://example.com/wh",
            "language": "English",
            "country": "United Kingdom",
            "imageLink": "images/wuthering-heights.jpg",
            "pages": 342,
            "year": 1847
        }]"#,
    )
    .expect("Failed to load records");

    let book = outcome.catalog.get(0).unwrap();
    assert_eq!(book.country.as_deref(), Some("United Kingdom"));
    assert_eq!(
        book.image_link.as_deref(),
        Some("images/wuthering-heights.jpg")
    );
    assert_eq!(book.pages, Some(342));
    assert_eq!(book.year, Some(1847));
}

#[test]
fn test_empty_link_is_valid() {
    let outcome = load_catalog_from_str(
        r#"[{"title": "T", "author": "A", "link": "", "language": "En"}]"#,
    )
    .expect("Failed to load records");

    assert_eq!(outcome.catalog.len(), 1);
    assert!(!outcome.catalog.get(0).unwrap().has_link());
}

#[test]
fn test_empty_array_gives_empty_catalog() {
    let outcome = load_catalog_from_str("[]").expect("Failed to load records");

    assert!(outcome.catalog.is_empty());
    assert!(outcome.problems.is_empty());
}

#[test]
fn test_load_order_is_preserved() {
    let outcome = load_catalog_from_str(
        r#"[
            {"title": "Zeta", "author": "A", "link": "", "language": "En"},
            {"title": "Alpha", "author": "A", "link": "", "language": "En"},
            {"title": "Mu", "author": "A", "link": "", "language": "En"}
        ]"#,
    )
    .expect("Failed to load records");

    let titles: Vec<&str> = outcome.catalog.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Zeta", "Alpha", "Mu"]);
}

// ============================================================================
// Malformed Input Tests
// ============================================================================

#[test]
fn test_malformed_records_skipped_and_reported() {
    let outcome = load_catalog_from_str(
        r#"[
            {"title": "Good One", "author": "A", "link": "", "language": "En"},
            {"title": "No Author", "link": "", "language": "En"},
            {"title": "Bad Pages", "author": "A", "link": "", "language": "En", "pages": "many"},
            {"title": "Good Two", "author": "B", "link": "", "language": "En"}
        ]"#,
    )
    .expect("Failed to load records");

    assert_eq!(outcome.catalog.len(), 2);
    let titles: Vec<&str> = outcome.catalog.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Good One", "Good Two"]);

    // One problem per skipped record, carrying its position in the array
    assert_eq!(outcome.problems.len(), 2);
    assert_eq!(outcome.problems[0].index, 1);
    assert_eq!(outcome.problems[1].index, 2);
}

#[test]
fn test_non_array_top_level_is_an_error() {
    let err = load_catalog_from_str(r#"{"title": "T"}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(load_catalog_from_str("not json at all").is_err());
}

// ============================================================================
// File Tests
// ============================================================================

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("books.json");
    std::fs::write(
        &path,
        r#"[{"title": "T", "author": "A", "link": "L", "language": "En"}]"#,
    )
    .expect("Failed to write data file");

    let outcome = load_catalog(&path).expect("Failed to load file");
    assert_eq!(outcome.catalog.len(), 1);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_catalog("no/such/books.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
