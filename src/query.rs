//! Query operations over a catalog.
//!
//! All queries are pure: they borrow the catalog, never mutate it, and
//! return a fresh [`Catalog`] (or a count map for duplicate detection).
//!
//! # Examples
//!
//! ```
//! use mediacat::{Catalog, CatalogQueries, Record};
//!
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
//! assert_eq!(catalog.search("herbert").len(), 1);
//! assert_eq!(catalog.filter_by_tag("sci-fi").len(), 1);
//! assert_eq!(catalog.top_n(5).len(), 1);
//! assert!(catalog.find_duplicates().is_empty());
//! # Ok::<(), mediacat::CatalogError>(())
//! ```

use crate::catalog::Catalog;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Configuration for the composite duplicate-detection key.
///
/// Two key shapes have circulated: `title|author|year` and the looser
/// `title|author`. The year-qualified shape is the default, so two editions
/// of the same work published in different years do not count as duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateKeyConfig {
    /// Include the year in the composite key. Default `true`.
    pub include_year: bool,
}

impl Default for DuplicateKeyConfig {
    fn default() -> Self {
        DuplicateKeyConfig { include_year: true }
    }
}

/// Read-only query operations over a [`Catalog`].
pub trait CatalogQueries {
    /// Retain records whose title or author contains `query` as a
    /// substring, ignoring ASCII case on both sides.
    ///
    /// Re-applying the same query is a no-op:
    /// `c.search(q).search(q) == c.search(q)`.
    #[must_use]
    fn search(&self, query: &str) -> Catalog;

    /// Retain records where `tag` is an exact, case-sensitive member of the
    /// record's tag list.
    #[must_use]
    fn filter_by_tag(&self, tag: &str) -> Catalog;

    /// The `n` records with the highest rating, descending.
    ///
    /// If `n` exceeds the catalog size the whole catalog is returned; if
    /// `n <= 0` the result is empty. Ties among equal ratings keep their
    /// original insertion order (stable sort).
    #[must_use]
    fn top_n(&self, n: i64) -> Catalog;

    /// Report duplicate records under the default `title|author|year` key.
    ///
    /// Returns only keys occurring more than once, mapped to their count,
    /// in lexicographic key order. The catalog itself is not deduplicated.
    #[must_use]
    fn find_duplicates(&self) -> IndexMap<String, usize>;

    /// Report duplicates under a configurable key shape.
    #[must_use]
    fn find_duplicates_with(&self, config: DuplicateKeyConfig) -> IndexMap<String, usize>;
}

impl CatalogQueries for Catalog {
    fn search(&self, query: &str) -> Catalog {
        let mut result = Catalog::new();
        for record in self {
            if record.matches_substring(query) {
                result.push_valid(record.clone());
            }
        }
        result
    }

    fn filter_by_tag(&self, tag: &str) -> Catalog {
        let mut result = Catalog::new();
        for record in self {
            if record.has_tag(tag) {
                result.push_valid(record.clone());
            }
        }
        result
    }

    fn top_n(&self, n: i64) -> Catalog {
        let mut result = Catalog::new();
        if n <= 0 {
            return result;
        }

        let mut records: Vec<_> = self.iter().cloned().collect();
        // Ratings are validated into [0.0, 10.0], so the comparison is
        // total in practice; equal treatment of any stray NaN keeps the
        // sort stable rather than panicking.
        records.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        });

        let keep = usize::try_from(n).unwrap_or(usize::MAX);
        for record in records.into_iter().take(keep) {
            result.push_valid(record);
        }
        result
    }

    fn find_duplicates(&self) -> IndexMap<String, usize> {
        self.find_duplicates_with(DuplicateKeyConfig::default())
    }

    fn find_duplicates_with(&self, config: DuplicateKeyConfig) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for record in self {
            *counts
                .entry(record.duplicate_key(config.include_year))
                .or_insert(0) += 1;
        }
        counts.retain(|_, count| *count > 1);
        // Lexicographic key order keeps duplicate reports reproducible
        // across platforms and runs.
        counts.sort_keys();
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn record(title: &str, author: &str, year: i32, rating: f64, tags: &[&str]) -> Record {
        Record::builder()
            .title(title)
            .author(author)
            .year(year)
            .rating(rating)
            .tags(tags.iter().copied())
            .build()
    }

    fn library() -> Catalog {
        let mut catalog = Catalog::new();
        for r in [
            record("Dune", "Frank Herbert", 1965, 9.2, &["sci-fi", "adventure"]),
            record("1984", "George Orwell", 1949, 9.0, &["dystopia"]),
            record("1984", "George Orwell", 1949, 8.8, &["dystopia", "classic"]),
            record("Emma", "Jane Austen", 1815, 8.1, &["classic"]),
        ] {
            catalog.add_record(r).unwrap();
        }
        catalog
    }

    #[test]
    fn test_search_case_folded_both_fields() {
        let catalog = library();
        assert_eq!(catalog.search("dune").len(), 1);
        assert_eq!(catalog.search("ORWELL").len(), 2);
        assert_eq!(catalog.search("austen").len(), 1);
        assert_eq!(catalog.search("zzz").len(), 0);
    }

    #[test]
    fn test_search_idempotent() {
        let catalog = library();
        let once = catalog.search("orwell");
        let twice = once.search("orwell");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_does_not_mutate() {
        let catalog = library();
        let _ = catalog.search("dune");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_filter_by_tag_exact() {
        let catalog = library();
        assert_eq!(catalog.filter_by_tag("classic").len(), 2);
        assert_eq!(catalog.filter_by_tag("Classic").len(), 0);
        assert_eq!(catalog.filter_by_tag("sci-fi").len(), 1);
    }

    #[test]
    fn test_top_n_orders_by_rating_desc() {
        let catalog = library();
        let top = catalog.top_n(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].title, "Dune");
        assert!((top[1].rating - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_n_bounds() {
        let catalog = library();
        assert_eq!(catalog.top_n(0).len(), 0);
        assert_eq!(catalog.top_n(-3).len(), 0);
        assert_eq!(catalog.top_n(100).len(), catalog.len());
    }

    #[test]
    fn test_top_n_ties_keep_insertion_order() {
        let mut catalog = Catalog::new();
        for title in ["First", "Second", "Third"] {
            catalog
                .add_record(record(title, "Same", 2000, 7.5, &[]))
                .unwrap();
        }
        let top = catalog.top_n(3);
        let titles: Vec<_> = top.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_find_duplicates_reports_counts() {
        let catalog = library();
        let dupes = catalog.find_duplicates();
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes.get("1984|George Orwell|1949"), Some(&2));
        // Reporting never deduplicates the catalog itself.
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_find_duplicates_no_singletons() {
        let catalog = library();
        for count in catalog.find_duplicates().values() {
            assert!(*count > 1);
        }
    }

    #[test]
    fn test_find_duplicates_without_year() {
        let mut catalog = library();
        // Same work, different year: a duplicate only under the short key.
        catalog
            .add_record(record("Dune", "Frank Herbert", 1984, 8.0, &[]))
            .unwrap();
        assert!(catalog.find_duplicates().get("Dune|Frank Herbert|1965").is_none());
        let short = catalog.find_duplicates_with(DuplicateKeyConfig {
            include_year: false,
        });
        assert_eq!(short.get("Dune|Frank Herbert"), Some(&2));
    }

    #[test]
    fn test_find_duplicates_lexicographic_order() {
        let mut catalog = Catalog::new();
        for title in ["Zeta", "Zeta", "Alpha", "Alpha"] {
            catalog
                .add_record(record(title, "A", 2000, 5.0, &[]))
                .unwrap();
        }
        let keys: Vec<_> = catalog.find_duplicates().keys().cloned().collect();
        assert_eq!(keys, ["Alpha|A|2000", "Zeta|A|2000"]);
    }
}
