//! Media catalog record structures and operations.
//!
//! This module provides the core record type for working with media catalog
//! entries:
//! - [`Record`] — One catalog entry (book, film, album, ...)
//! - [`RecordBuilder`] — Fluent construction of records
//!
//! # Examples
//!
//! Create a record with the builder API:
//!
//! ```
//! use mediacat::Record;
//!
//! let record = Record::builder()
//!     .id("b42")
//!     .title("Dune")
//!     .author("Frank Herbert")
//!     .year(1965)
//!     .rating(9.2)
//!     .tag("sci-fi")
//!     .tag("adventure")
//!     .build();
//!
//! assert_eq!(record.title, "Dune");
//! assert!(record.has_tag("sci-fi"));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered tag storage.
///
/// Tags are stored in a `SmallVec` to avoid allocation for typical records
/// with four or fewer tags. Insertion order is preserved and duplicates are
/// kept; the tag list mirrors the source text exactly.
pub type TagList = SmallVec<[String; 4]>;

/// One media catalog entry.
///
/// A record becomes a member of a [`Catalog`](crate::Catalog) only if it
/// satisfies every rule of the [`RecordValidator`](crate::RecordValidator);
/// records are otherwise inert data with no behavior of their own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier. May be empty; never validated.
    pub id: String,
    /// Title. Required non-empty for a record to be valid.
    pub title: String,
    /// Author or creator. Required non-empty under strict validation.
    pub author: String,
    /// Publication year. Valid range is 1800..=2100; parser default is 0.
    pub year: i32,
    /// Rating on a 0.0..=10.0 scale; parser default is 0.0.
    pub rating: f64,
    /// Tags in source order, duplicates preserved.
    pub tags: TagList,
}

impl Record {
    /// Create an empty record with all fields at their parser defaults.
    ///
    /// The defaults (`year = 0`, `rating = 0.0`, empty strings) deliberately
    /// fail validation, so a record that never received its required fields
    /// cannot slip into a catalog.
    #[must_use]
    pub fn new() -> Self {
        Record::default()
    }

    /// Create a builder for fluently constructing records.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediacat::Record;
    ///
    /// let record = Record::builder()
    ///     .title("The Left Hand of Darkness")
    ///     .author("Ursula K. Le Guin")
    ///     .year(1969)
    ///     .rating(9.0)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: Record::default(),
        }
    }

    /// Check whether `tag` is an exact (case-sensitive) member of the tag list.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Append a tag, preserving insertion order.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Check whether `needle` occurs in the title or author, ignoring ASCII case.
    ///
    /// Case folding is byte-wise ASCII lowering; non-ASCII text compares
    /// case-sensitively.
    #[must_use]
    pub fn matches_substring(&self, needle: &str) -> bool {
        let needle = needle.to_ascii_lowercase();
        self.title.to_ascii_lowercase().contains(&needle)
            || self.author.to_ascii_lowercase().contains(&needle)
    }

    /// Build the composite key used for duplicate detection.
    ///
    /// The key is `title|author|year`, or `title|author` when `include_year`
    /// is `false`.
    #[must_use]
    pub fn duplicate_key(&self, include_year: bool) -> String {
        if include_year {
            format!("{}|{}|{}", self.title, self.author, self.year)
        } else {
            format!("{}|{}", self.title, self.author)
        }
    }
}

/// Builder for fluently constructing [`Record`] instances.
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Set the record identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.record.id = id.into();
        self
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = title.into();
        self
    }

    /// Set the author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.record.author = author.into();
        self
    }

    /// Set the publication year.
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.record.year = year;
        self
    }

    /// Set the rating.
    #[must_use]
    pub fn rating(mut self, rating: f64) -> Self {
        self.record.rating = rating;
        self
    }

    /// Append one tag. Multiple calls accumulate in order.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.record.tags.push(tag.into());
        self
    }

    /// Replace the whole tag list.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Finish building and return the record.
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}
