//! Writing catalogs back out in the dialect.
//!
//! This module provides [`CatalogWriter`] for serializing a
//! [`Catalog`] to the same line-oriented dialect the reader consumes: a
//! bracketed array, one object per record, two-space indentation, fields in
//! the order `id, title, author, year, rating, tags`, and a trailing comma
//! between records but not after the last.
//!
//! Two deliberate asymmetries with the reader, inherent to the dialect:
//! - `rating` is rendered with exactly one fractional digit, so a
//!   serialize/parse round-trip may change its last decimal.
//! - string fields are written without re-escaping; a title containing a
//!   literal `"` will not survive a round-trip.
//!
//! # Examples
//!
//! ```
//! use mediacat::{Catalog, CatalogWriter, Record};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_record(
//!     Record::builder()
//!         .title("Dune")
//!         .author("Frank Herbert")
//!         .year(1965)
//!         .rating(9.2)
//!         .build(),
//! )?;
//!
//! let mut buffer = Vec::new();
//! CatalogWriter::new(&mut buffer).write_catalog(&catalog)?;
//! let text = String::from_utf8(buffer).unwrap();
//! assert!(text.contains("\"rating\": 9.2"));
//! # Ok::<(), mediacat::CatalogError>(())
//! ```

use crate::catalog::Catalog;
use crate::error::Result;
use crate::record::Record;
use std::io::Write;
use std::path::Path;

/// Writer for the line-oriented catalog dialect.
#[derive(Debug)]
pub struct CatalogWriter<W: Write> {
    writer: W,
    records_written: usize,
}

impl<W: Write> CatalogWriter<W> {
    /// Create a new writer over any destination implementing
    /// [`std::io::Write`].
    pub fn new(writer: W) -> Self {
        CatalogWriter {
            writer,
            records_written: 0,
        }
    }

    /// Write a whole catalog as one bracketed array.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the destination fails.
    pub fn write_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        writeln!(self.writer, "[")?;
        for (i, record) in catalog.iter().enumerate() {
            let last = i + 1 == catalog.len();
            self.write_record(record, last)?;
        }
        writeln!(self.writer, "]")?;
        Ok(())
    }

    /// Number of records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    fn write_record(&mut self, record: &Record, last: bool) -> Result<()> {
        writeln!(self.writer, "  {{")?;
        writeln!(self.writer, "    \"id\": \"{}\",", record.id)?;
        writeln!(self.writer, "    \"title\": \"{}\",", record.title)?;
        writeln!(self.writer, "    \"author\": \"{}\",", record.author)?;
        writeln!(self.writer, "    \"year\": {},", record.year)?;
        writeln!(self.writer, "    \"rating\": {:.1},", record.rating)?;

        let tags: Vec<String> = record.tags.iter().map(|t| format!("\"{t}\"")).collect();
        writeln!(self.writer, "    \"tags\": [{}]", tags.join(", "))?;

        if last {
            writeln!(self.writer, "  }}")?;
        } else {
            writeln!(self.writer, "  }},")?;
        }
        self.records_written += 1;
        Ok(())
    }
}

/// Serialize a catalog to a dialect string.
#[must_use]
pub fn serialize(catalog: &Catalog) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail, so the error arm is unreachable.
    if CatalogWriter::new(&mut buffer).write_catalog(catalog).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write a catalog to a file, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_catalog_to_path(path: impl AsRef<Path>, catalog: &Catalog) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = CatalogWriter::new(std::io::BufWriter::new(file));
    writer.write_catalog(catalog)
}
