//! Validation of catalog records.
//!
//! Every record must pass the validator before it becomes a member of a
//! [`Catalog`](crate::Catalog); the parser applies it automatically and
//! drops records that fail. Each rule is evaluated independently and all
//! must hold.
//!
//! Validation problems are reported as values (human-readable violation
//! strings naming the broken rule and the offending record), never as
//! panics or log output.

use crate::record::Record;

/// Inclusive year range accepted by the validator.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1800..=2100;

/// Inclusive rating range accepted by the validator.
pub const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Configuration for validation strictness.
///
/// The catalog dialect has circulated with two incompatible author rules;
/// both are supported here. The strict rule (author required) is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Require a non-empty `author` field. Default `true`.
    pub require_author: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            require_author: true,
        }
    }
}

/// Validator applying the per-field acceptance rules to a [`Record`].
///
/// # Examples
///
/// ```
/// use mediacat::{Record, RecordValidator};
///
/// let validator = RecordValidator::default();
/// let record = Record::builder()
///     .title("Dune")
///     .author("Frank Herbert")
///     .year(1965)
///     .rating(9.2)
///     .build();
/// assert!(validator.is_valid(&record));
///
/// let nameless = Record::builder().title("").rating(5.0).build();
/// assert!(!validator.is_valid(&nameless));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator {
    config: ValidationConfig,
}

impl RecordValidator {
    /// Create a validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        RecordValidator { config }
    }

    /// Create a validator with the relaxed author rule.
    #[must_use]
    pub fn lenient() -> Self {
        RecordValidator {
            config: ValidationConfig {
                require_author: false,
            },
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> ValidationConfig {
        self.config
    }

    /// Check whether a record satisfies every validation rule.
    #[must_use]
    pub fn is_valid(&self, record: &Record) -> bool {
        self.violations(record).is_empty()
    }

    /// Collect one human-readable message per violated rule.
    ///
    /// Each message names the rule and identifies the record by `id` and
    /// `title`. An empty result means the record is valid.
    #[must_use]
    pub fn violations(&self, record: &Record) -> Vec<String> {
        let mut violations = Vec::new();
        let who = describe(record);

        if record.title.is_empty() {
            violations.push(format!("{who}: title must not be empty"));
        }
        if !RATING_RANGE.contains(&record.rating) {
            violations.push(format!(
                "{who}: rating {} outside [0.0, 10.0]",
                record.rating
            ));
        }
        if !YEAR_RANGE.contains(&record.year) {
            violations.push(format!("{who}: year {} outside [1800, 2100]", record.year));
        }
        if self.config.require_author && record.author.is_empty() {
            violations.push(format!("{who}: author must not be empty"));
        }
        violations
    }
}

/// Identify a record in diagnostics by id and title, tolerating both empty.
fn describe(record: &Record) -> String {
    match (record.id.is_empty(), record.title.is_empty()) {
        (false, false) => format!("record '{}' (\"{}\")", record.id, record.title),
        (false, true) => format!("record '{}'", record.id),
        (true, false) => format!("record \"{}\"", record.title),
        (true, true) => "record <unidentified>".to_string(),
    }
}
