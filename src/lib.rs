#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # mediacat
//!
//! A library for parsing, validating, and querying media catalog records
//! stored in a restricted, line-oriented JSON dialect.
//!
//! ## Quick Start
//!
//! ### Reading a catalog
//!
//! ```no_run
//! use mediacat::CatalogReader;
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("records.json")?;
//! let mut reader = CatalogReader::new(file);
//!
//! while let Some(record) = reader.read_record()? {
//!     println!("{} ({})", record.title, record.year);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Querying
//!
//! ```
//! use mediacat::{Catalog, CatalogQueries, Record};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = Catalog::new();
//! catalog.add_record(
//!     Record::builder()
//!         .title("Dune")
//!         .author("Frank Herbert")
//!         .year(1965)
//!         .rating(9.2)
//!         .tag("sci-fi")
//!         .build(),
//! )?;
//!
//! let favorites = catalog.search("herbert").top_n(10);
//! assert_eq!(favorites.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Core record structure (`Record`, `RecordBuilder`)
//! - [`lexer`] — Line classification and raw field extraction
//! - [`reader`] — Reading records from dialect text streams
//! - [`writer`] — Writing catalogs back to the dialect
//! - [`catalog`] — The ordered catalog container
//! - [`validation`] — Record acceptance rules
//! - [`query`] — Substring search, tag filter, top-N, duplicate detection
//! - [`json`] — Loading catalogs from generic JSON via `serde_json`
//! - [`error`] — Error types and result type
//!
//! ## Error policy
//!
//! Malformed dialect text is never fatal: numeric fields fall back to
//! defaults, invalid records are dropped, and an unreadable file loads as an
//! empty catalog. Everything the parser glossed over is reported through
//! [`ParseReport`].

pub mod catalog;
pub mod error;
pub mod json;
pub mod lexer;
pub mod query;
pub mod reader;
/// Core record structure (`Record`, `RecordBuilder`)
pub mod record;
pub mod validation;
pub mod writer;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use query::{CatalogQueries, DuplicateKeyConfig};
pub use reader::{read_catalog_from_path, CatalogReader, ParseReport};
pub use record::{Record, RecordBuilder, TagList};
pub use validation::{RecordValidator, ValidationConfig};
pub use writer::{serialize, write_catalog_to_path, CatalogWriter};
