//! Reading catalog records from dialect text.
//!
//! This module provides [`CatalogReader`] for reading records from any
//! source that implements [`std::io::Read`]. Parsing is a two-state machine
//! over classified lines: outside a record, a `{` starts one; inside, field
//! assignments accumulate until a `}` closes and validates it.
//!
//! Malformed input is never fatal. Bad numeric text leaves the field at its
//! default, records that fail validation are dropped, and every such event
//! lands in the reader's [`ParseReport`].
//!
//! # Examples
//!
//! Reading records one at a time:
//!
//! ```
//! use mediacat::CatalogReader;
//! use std::io::Cursor;
//!
//! let text = r#"[
//!   {
//!     "title": "Dune",
//!     "author": "Frank Herbert",
//!     "year": 1965,
//!     "rating": 9.2
//!   }
//! ]"#;
//!
//! let mut reader = CatalogReader::new(Cursor::new(text));
//! while let Some(record) = reader.read_record()? {
//!     println!("{}", record.title);
//! }
//! # Ok::<(), mediacat::CatalogError>(())
//! ```

use crate::catalog::Catalog;
use crate::error::Result;
use crate::lexer::{self, Token};
use crate::record::Record;
use crate::validation::RecordValidator;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

/// Diagnostics accumulated while parsing dialect text.
///
/// Every recovered problem — an unparseable number, a dropped record, an
/// unreadable file — is recorded here as a human-readable message. The
/// report never affects control flow; it exists so callers can surface what
/// the tolerant parser glossed over.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Human-readable diagnostic messages, in encounter order.
    pub diagnostics: Vec<String>,
    /// Number of records that passed validation.
    pub records_accepted: usize,
    /// Number of records dropped by validation or truncation.
    pub records_rejected: usize,
}

impl ParseReport {
    /// Whether any diagnostic was recorded.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    fn diagnostic(&mut self, message: impl Into<String>) {
        self.diagnostics.push(message.into());
    }
}

/// Reader for the line-oriented catalog dialect.
///
/// `CatalogReader` reads one record at a time from any source implementing
/// [`std::io::Read`]. Only records that pass the configured validator are
/// returned; invalid ones are dropped and reported.
///
/// # Examples
///
/// ```
/// use mediacat::CatalogReader;
/// use std::io::Cursor;
///
/// let mut reader = CatalogReader::new(Cursor::new("[]"));
/// assert!(reader.read_record().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct CatalogReader<R: Read> {
    lines: Lines<BufReader<R>>,
    validator: RecordValidator,
    report: ParseReport,
}

impl<R: Read> CatalogReader<R> {
    /// Create a new reader with the default (strict) validator.
    pub fn new(reader: R) -> Self {
        CatalogReader {
            lines: BufReader::new(reader).lines(),
            validator: RecordValidator::default(),
            report: ParseReport::default(),
        }
    }

    /// Replace the validator applied to each completed record.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediacat::{CatalogReader, RecordValidator};
    /// use std::io::Cursor;
    ///
    /// let reader = CatalogReader::new(Cursor::new("[]"))
    ///     .with_validator(RecordValidator::lenient());
    /// ```
    #[must_use]
    pub fn with_validator(mut self, validator: RecordValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Read the next valid record.
    ///
    /// Returns `Ok(Some(record))` for the next record that passes
    /// validation, `Ok(None)` at end of input. Invalid records are skipped
    /// silently here and accounted for in [`Self::report`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying source fails mid-read;
    /// malformed dialect text never produces an error.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        let mut current: Option<Record> = None;

        for line in self.lines.by_ref() {
            let line = line?;
            match lexer::classify(&line) {
                Token::ObjectOpen => {
                    // A second `{` inside a record has no transition; the
                    // line is treated as ignorable.
                    if current.is_none() {
                        current = Some(Record::new());
                    }
                }
                Token::FieldAssignment { key, raw } => {
                    if let Some(record) = current.as_mut() {
                        assign_field(record, key, raw, &mut self.report);
                    }
                }
                Token::ObjectClose => {
                    if let Some(record) = current.take() {
                        let violations = self.validator.violations(&record);
                        if violations.is_empty() {
                            self.report.records_accepted += 1;
                            return Ok(Some(record));
                        }
                        self.report.records_rejected += 1;
                        self.report.diagnostics.extend(violations);
                    }
                }
                Token::Ignorable => {}
            }
        }

        if current.is_some() {
            self.report
                .diagnostic("input ended inside an unterminated record; record dropped");
            self.report.records_rejected += 1;
        }
        Ok(None)
    }

    /// Read all remaining records into a [`Catalog`].
    ///
    /// # Errors
    ///
    /// Returns an error only on an underlying IO failure.
    pub fn read_catalog(&mut self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        while let Some(record) = self.read_record()? {
            catalog.push_valid(record);
        }
        Ok(catalog)
    }

    /// The diagnostics accumulated so far.
    #[must_use]
    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    /// Consume the reader, returning its report.
    #[must_use]
    pub fn into_report(self) -> ParseReport {
        self.report
    }
}

/// Assign one field into the current record by key name.
///
/// Unknown keys are ignored. A numeric field that fails to parse keeps its
/// previous (default) value and records a diagnostic; the record may still
/// be rejected later if the default violates a range rule.
fn assign_field(record: &mut Record, key: &str, raw: &str, report: &mut ParseReport) {
    match key {
        "id" => record.id = lexer::extract_string(raw),
        "title" => record.title = lexer::extract_string(raw),
        "author" => record.author = lexer::extract_string(raw),
        "year" => match lexer::extract_integer(raw) {
            Some(year) => record.year = year,
            None => report.diagnostic(format!(
                "unparseable year '{}'; field keeps default {}",
                raw.trim(),
                record.year
            )),
        },
        "rating" => match lexer::extract_float(raw) {
            Some(rating) => record.rating = rating,
            None => report.diagnostic(format!(
                "unparseable rating '{}'; field keeps default {}",
                raw.trim(),
                record.rating
            )),
        },
        "tags" => record.tags = lexer::extract_string_array(raw),
        _ => {}
    }
}

/// Load a catalog from a file, never failing.
///
/// An unreadable file yields an empty catalog with a diagnostic, matching
/// the dialect's error policy: every failure degrades to fewer records, not
/// an aborted batch.
///
/// # Examples
///
/// ```no_run
/// use mediacat::reader::read_catalog_from_path;
///
/// let (catalog, report) = read_catalog_from_path("records.json");
/// for message in &report.diagnostics {
///     eprintln!("warning: {message}");
/// }
/// println!("{} records loaded", catalog.len());
/// ```
pub fn read_catalog_from_path(path: impl AsRef<Path>) -> (Catalog, ParseReport) {
    let path = path.as_ref();
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let mut report = ParseReport::default();
            report.diagnostic(format!("cannot open {}: {e}", path.display()));
            return (Catalog::new(), report);
        }
    };

    let mut reader = CatalogReader::new(file);
    let catalog = match reader.read_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            reader
                .report
                .diagnostic(format!("read failed for {}: {e}", path.display()));
            Catalog::new()
        }
    };
    (catalog, reader.into_report())
}
