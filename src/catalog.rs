//! The catalog container.
//!
//! A [`Catalog`] is an ordered collection of valid [`Record`]s. Order is the
//! order of appearance in the source text; loading never re-sorts. The only
//! mutating operation is [`Catalog::add_record`], a validating append; every
//! query produces a new catalog and leaves the original untouched.

use crate::error::{CatalogError, Result};
use crate::record::Record;
use crate::validation::RecordValidator;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered collection of valid media records.
///
/// # Examples
///
/// ```
/// use mediacat::{Catalog, Record};
///
/// let mut catalog = Catalog::new();
/// catalog.add_record(
///     Record::builder()
///         .title("Dune")
///         .author("Frank Herbert")
///         .year(1965)
///         .rating(9.2)
///         .build(),
/// )?;
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), mediacat::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Catalog {
            records: Vec::new(),
        }
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records as a slice, in source order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get a record by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate over the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Append a record after validating it with the default (strict) rules.
    ///
    /// This is the interactive "new entry" path; the parser validates
    /// internally and does not go through here.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecord`] naming every violated rule if
    /// the record fails validation; the catalog is unchanged in that case.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        self.add_record_with(record, &RecordValidator::default())
    }

    /// Append a record after validating it with the given validator.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecord`] if the record fails validation.
    pub fn add_record_with(&mut self, record: Record, validator: &RecordValidator) -> Result<()> {
        let violations = validator.violations(&record);
        if violations.is_empty() {
            self.records.push(record);
            Ok(())
        } else {
            Err(CatalogError::InvalidRecord(violations.join("; ")))
        }
    }

    /// Append a record that has already been validated.
    pub(crate) fn push_valid(&mut self, record: Record) {
        self.records.push(record);
    }
}

impl Index<usize> for Catalog {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
