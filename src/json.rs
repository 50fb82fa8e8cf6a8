//! Building catalogs from generic JSON values.
//!
//! This is the library-backed loading variant: instead of the hand-rolled
//! line lexer, a [`serde_json::Value`] tree supplies the fields. Extraction
//! follows get-with-default semantics — a missing or wrongly typed field
//! keeps the record's default value — and the validation path is identical
//! to the dialect reader's, so both loaders accept exactly the same records.
//!
//! # Examples
//!
//! ```
//! use mediacat::json::catalog_from_json;
//!
//! let catalog = catalog_from_json(
//!     r#"[{"title": "Dune", "author": "Frank Herbert", "year": 1965, "rating": 9.2}]"#,
//! )?;
//! assert_eq!(catalog.len(), 1);
//! # Ok::<(), mediacat::CatalogError>(())
//! ```

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::reader::ParseReport;
use crate::record::Record;
use crate::validation::RecordValidator;
use serde_json::Value;

/// Extract a record from one JSON object node.
///
/// Every field falls back to its default when absent or of the wrong type;
/// this never fails. Validation is the caller's responsibility.
#[must_use]
pub fn record_from_value(value: &Value) -> Record {
    Record {
        id: string_field(value, "id"),
        title: string_field(value, "title"),
        author: string_field(value, "author"),
        year: value
            .get("year")
            .and_then(Value::as_i64)
            .and_then(|y| i32::try_from(y).ok())
            .unwrap_or(0),
        rating: value.get("rating").and_then(Value::as_f64).unwrap_or(0.0),
        tags: value
            .get("tags")
            .and_then(Value::as_array)
            .map(|array| {
                array
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Build a catalog from a parsed JSON value.
///
/// The value must be an array of objects; each object yields one record,
/// validated with `validator`. Invalid records are dropped and reported,
/// matching the dialect reader's behavior.
///
/// # Errors
///
/// Returns [`CatalogError::ParseError`] if `value` is not an array.
pub fn catalog_from_value(
    value: &Value,
    validator: &RecordValidator,
) -> Result<(Catalog, ParseReport)> {
    let array = value
        .as_array()
        .ok_or_else(|| CatalogError::ParseError("expected a top-level JSON array".to_string()))?;

    let mut catalog = Catalog::new();
    let mut report = ParseReport::default();
    for item in array {
        let record = record_from_value(item);
        let violations = validator.violations(&record);
        if violations.is_empty() {
            report.records_accepted += 1;
            catalog.push_valid(record);
        } else {
            report.records_rejected += 1;
            report.diagnostics.extend(violations);
        }
    }
    Ok((catalog, report))
}

/// Parse JSON text and build a catalog with the default (strict) validator.
///
/// # Errors
///
/// Returns [`CatalogError::JsonError`] if the text is not well-formed JSON,
/// or [`CatalogError::ParseError`] if the top level is not an array.
pub fn catalog_from_json(text: &str) -> Result<Catalog> {
    let value: Value = serde_json::from_str(text)?;
    let (catalog, _report) = catalog_from_value(&value, &RecordValidator::default())?;
    Ok(catalog)
}

/// Parse JSON text into a catalog plus its parse report.
///
/// # Errors
///
/// Same failure modes as [`catalog_from_json`].
pub fn catalog_from_json_with_report(
    text: &str,
    validator: &RecordValidator,
) -> Result<(Catalog, ParseReport)> {
    let value: Value = serde_json::from_str(text)?;
    catalog_from_value(&value, validator)
}
