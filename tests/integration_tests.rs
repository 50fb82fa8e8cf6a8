//! Integration tests for the mediacat library

use mediacat::{
    json, read_catalog_from_path, serialize, write_catalog_to_path, Catalog, CatalogQueries,
    CatalogReader, Record,
};
use std::fs::File;

fn load_fixture(name: &str) -> (Catalog, mediacat::ParseReport) {
    read_catalog_from_path(format!("tests/data/{name}"))
}

#[test]
fn test_load_library_fixture() {
    let (catalog, report) = load_fixture("library.json");

    // Five objects in the file; the empty-title record is dropped.
    assert_eq!(catalog.len(), 4);
    assert_eq!(report.records_accepted, 4);
    assert_eq!(report.records_rejected, 1);
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.contains("title must not be empty")));

    let titles: Vec<_> = catalog.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "1984", "1984", "Emma"]);
}

#[test]
fn test_load_malformed_fixture() {
    let (catalog, report) = load_fixture("malformed.json");

    // Only "Survivor" survives: bad-year keeps the default year 0 and fails
    // validation, bad-title loses its unterminated title, and the trailing
    // record is cut off by end of input.
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, "ok");

    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.contains("unparseable year")));
    assert!(report.diagnostics.iter().any(|d| d.contains("title")));
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.contains("unterminated")));
}

#[test]
fn test_reference_scenario() {
    // One valid Dune record plus one invalid record with an empty title:
    // the catalog holds exactly Dune and each query behaves as documented.
    let text = r#"[
  {
    "title": "Dune",
    "author": "Frank Herbert",
    "year": 1965,
    "rating": 9.2,
    "tags": ["sci-fi", "adventure"]
  },
  {
    "title": "",
    "rating": 5
  }
]"#;
    let mut reader = CatalogReader::new(text.as_bytes());
    let catalog = reader.read_catalog().expect("in-memory read cannot fail");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].title, "Dune");

    assert_eq!(catalog.search("dune").len(), 1);
    assert_eq!(catalog.filter_by_tag("sci-fi").len(), 1);
    assert_eq!(catalog.top_n(5).len(), 1);
    assert!(catalog.find_duplicates().is_empty());
}

#[test]
fn test_duplicate_detection_on_fixture() {
    let (catalog, _) = load_fixture("library.json");
    let dupes = catalog.find_duplicates();
    assert_eq!(dupes.len(), 1);
    assert_eq!(dupes.get("1984|George Orwell|1949"), Some(&2));
}

#[test]
fn test_query_composition() {
    let (catalog, _) = load_fixture("library.json");
    let result = catalog.filter_by_tag("classic").search("orwell").top_n(1);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "b4");
}

#[test]
fn test_roundtrip_through_file() {
    let (original, _) = load_fixture("library.json");

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.json");
    write_catalog_to_path(&path, &original).expect("write catalog");

    let (restored, report) = read_catalog_from_path(&path);
    assert!(!report.has_diagnostics());
    assert_eq!(restored.len(), original.len());
    for (a, b) in original.iter().zip(restored.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.title, b.title);
        assert_eq!(a.author, b.author);
        assert_eq!(a.year, b.year);
        assert_eq!(a.tags, b.tags);
        // Ratings in the fixture already carry one fractional digit, so
        // they survive exactly.
        assert!((a.rating - b.rating).abs() < f64::EPSILON);
    }
}

#[test]
fn test_rating_rounding_across_roundtrip() {
    let mut catalog = Catalog::new();
    catalog
        .add_record(
            Record::builder()
                .title("Solaris")
                .author("Stanislaw Lem")
                .year(1961)
                .rating(9.27)
                .build(),
        )
        .expect("valid record");

    let restored = CatalogReader::new(serialize(&catalog).as_bytes())
        .read_catalog()
        .expect("in-memory read cannot fail");
    assert!((restored[0].rating - 9.3).abs() < f64::EPSILON);
}

#[test]
fn test_json_loader_matches_dialect_reader() {
    // The fixture is both valid dialect text and valid JSON, so the
    // hand-rolled reader and the serde_json-backed loader must agree.
    let text = std::fs::read_to_string("tests/data/library.json").expect("read fixture");

    let dialect = CatalogReader::new(text.as_bytes())
        .read_catalog()
        .expect("in-memory read cannot fail");
    let generic = json::catalog_from_json(&text).expect("well-formed JSON");

    assert_eq!(dialect, generic);
}

#[test]
fn test_validating_append() {
    let (mut catalog, _) = load_fixture("library.json");
    let before = catalog.len();

    catalog
        .add_record(
            Record::builder()
                .id("new")
                .title("Hyperion")
                .author("Dan Simmons")
                .year(1989)
                .rating(8.9)
                .tag("sci-fi")
                .build(),
        )
        .expect("valid record appends");
    assert_eq!(catalog.len(), before + 1);

    let err = catalog.add_record(Record::default()).unwrap_err();
    assert!(err.to_string().contains("title"));
    assert_eq!(catalog.len(), before + 1);
}

#[test]
fn test_missing_file_is_not_fatal() {
    let (catalog, report) = read_catalog_from_path("tests/data/does_not_exist.json");
    assert!(catalog.is_empty());
    assert_eq!(report.diagnostics.len(), 1);
    assert!(report.diagnostics[0].contains("cannot open"));
}

#[test]
fn test_reader_accepts_any_read_source() {
    let file = File::open("tests/data/library.json").expect("fixture exists");
    let mut reader = CatalogReader::new(file);
    let first = reader
        .read_record()
        .expect("read succeeds")
        .expect("fixture has records");
    assert_eq!(first.title, "Dune");
}
