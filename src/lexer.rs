//! Line classification and raw field extraction for the catalog dialect.
//!
//! The dialect is intentionally flat: a top-level bracketed list of objects,
//! one field per line, no nesting beyond a single tag array. This module
//! classifies one line at a time into a [`Token`] and provides the extractors
//! that recover typed values from the raw text after a field's colon.
//!
//! Extraction is total: malformed text yields an empty string, an empty
//! array, or `None` for numerics, never an error. Callers decide whether a
//! missing value deserves a diagnostic.
//!
//! # Examples
//!
//! ```
//! use mediacat::lexer::{classify, extract_string, Token};
//!
//! match classify(r#"  "title": "Dune",  "#) {
//!     Token::FieldAssignment { key, raw } => {
//!         assert_eq!(key, "title");
//!         assert_eq!(extract_string(raw), "Dune");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::record::TagList;
use lazy_static::lazy_static;
use memchr::memchr;
use regex::Regex;

lazy_static! {
    /// Matches `"<key>" : <value>` with the key as the quoted token before
    /// the first colon and the value as everything after it.
    static ref ASSIGNMENT: Regex = Regex::new(r#"^"([^"]+)"\s*:\s*(.*)$"#).unwrap();
}

/// Classification of one trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `{` — a record begins.
    ObjectOpen,
    /// `}` or `},` — the current record ends.
    ObjectClose,
    /// `"<key>": <value>` — a field assignment inside a record.
    FieldAssignment {
        /// The quoted key before the first colon.
        key: &'a str,
        /// Everything after the colon, untrimmed at the right.
        raw: &'a str,
    },
    /// Anything else: blank lines, the top-level `[` / `]`, stray text,
    /// continuation lines of unsupported multi-line arrays.
    Ignorable,
}

/// Classify one line of dialect text.
///
/// The line is trimmed before classification; extraction keys off the
/// trimmed text so indentation never matters.
#[must_use]
pub fn classify(line: &str) -> Token<'_> {
    let trimmed = line.trim();
    if trimmed == "{" {
        return Token::ObjectOpen;
    }
    if trimmed == "}" || trimmed == "}," {
        return Token::ObjectClose;
    }
    if let Some(caps) = ASSIGNMENT.captures(trimmed) {
        // Indexing is safe: the pattern has exactly two capture groups.
        return Token::FieldAssignment {
            key: caps.get(1).map_or("", |m| m.as_str()),
            raw: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    Token::Ignorable
}

/// Map the character after a backslash to its unescaped form.
///
/// `\n` and `\t` become control characters; any other escaped character is
/// copied literally, which covers `\"` and `\\` as well.
fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        other => other,
    }
}

/// Extract a string value from the raw text after a field's colon.
///
/// Scans from the first `"`, honoring `\n`, `\t`, `\"`, and `\\` escapes,
/// and stops at the first unescaped closing `"`. If no opening or closing
/// quote is found the value is the empty string; this never fails.
#[must_use]
pub fn extract_string(raw: &str) -> String {
    let Some(start) = memchr(b'"', raw.as_bytes()) else {
        return String::new();
    };
    let mut out = String::new();
    let mut chars = raw[start + 1..].chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => out.push(unescape(escaped)),
                // Trailing backslash with nothing after it: unterminated.
                None => return String::new(),
            },
            '"' => return out,
            other => out.push(other),
        }
    }
    // No closing quote on this line.
    String::new()
}

/// Extract an integer from the raw text after a field's colon.
///
/// Consumes consecutive ASCII digits (leading whitespace skipped) and stops
/// at the first non-digit. Returns `None` if zero digits were consumed or
/// the digits overflow an `i32`; the caller keeps the field's default.
#[must_use]
pub fn extract_integer(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Extract a floating-point number from the raw text after a field's colon.
///
/// Identical to [`extract_integer`] except that at most one `.` is accepted
/// among the digits. Returns `None` if zero digits were consumed.
#[must_use]
pub fn extract_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let mut seen_dot = false;
    let mut digits = 0usize;
    let mut end = 0usize;
    for (i, b) in s.bytes().enumerate() {
        if b.is_ascii_digit() {
            digits += 1;
        } else if b == b'.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end = i + 1;
    }
    if digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Extract an array of strings from the raw text after a field's colon.
///
/// Locates `[` ... `]` on the same line and collects the quote-delimited
/// tokens inside, ignoring commas and intervening whitespace. Escapes are
/// honored within each token. An array with no quoted tokens, a missing
/// bracket, or a multi-line array (a documented limitation of the dialect)
/// all yield an empty list.
#[must_use]
pub fn extract_string_array(raw: &str) -> TagList {
    let mut out = TagList::new();
    let bytes = raw.as_bytes();
    let Some(open) = memchr(b'[', bytes) else {
        return out;
    };
    let Some(close) = memchr(b']', &bytes[open..]) else {
        return out;
    };
    let inner = &raw[open + 1..open + close];

    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '"' {
            continue;
        }
        let mut token = String::new();
        let mut closed = false;
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => token.push(unescape(escaped)),
                    None => break,
                },
                '"' => {
                    closed = true;
                    break;
                }
                other => token.push(other),
            }
        }
        if closed {
            out.push(token);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_object_open() {
        assert_eq!(classify("{"), Token::ObjectOpen);
        assert_eq!(classify("  {  "), Token::ObjectOpen);
    }

    #[test]
    fn test_classify_object_close() {
        assert_eq!(classify("}"), Token::ObjectClose);
        assert_eq!(classify("},"), Token::ObjectClose);
        assert_eq!(classify("  },"), Token::ObjectClose);
    }

    #[test]
    fn test_classify_field_assignment() {
        match classify(r#""year": 1965,"#) {
            Token::FieldAssignment { key, raw } => {
                assert_eq!(key, "year");
                assert_eq!(raw, "1965,");
            }
            other => panic!("expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_ignorable() {
        assert_eq!(classify(""), Token::Ignorable);
        assert_eq!(classify("["), Token::Ignorable);
        assert_eq!(classify("]"), Token::Ignorable);
        assert_eq!(classify("not a field"), Token::Ignorable);
        // A bare quoted string without a colon is a continuation line of an
        // unsupported multi-line array.
        assert_eq!(classify(r#""sci-fi","#), Token::Ignorable);
    }

    #[test]
    fn test_extract_string_simple() {
        assert_eq!(extract_string(r#""Dune","#), "Dune");
        assert_eq!(extract_string(r#"  "Dune""#), "Dune");
    }

    #[test]
    fn test_extract_string_escapes() {
        assert_eq!(extract_string(r#""a\nb""#), "a\nb");
        assert_eq!(extract_string(r#""a\tb""#), "a\tb");
        assert_eq!(extract_string(r#""say \"hi\"""#), "say \"hi\"");
        assert_eq!(extract_string(r#""c:\\temp""#), "c:\\temp");
        // Unknown escapes are copied literally.
        assert_eq!(extract_string(r#""a\qb""#), "aqb");
    }

    #[test]
    fn test_extract_string_unterminated_is_empty() {
        assert_eq!(extract_string(r#""no closing quote"#), "");
        assert_eq!(extract_string("no quotes at all"), "");
        assert_eq!(extract_string(r#""trailing backslash\"#), "");
    }

    #[test]
    fn test_extract_integer() {
        assert_eq!(extract_integer("1965,"), Some(1965));
        assert_eq!(extract_integer("  2001"), Some(2001));
        assert_eq!(extract_integer("12abc"), Some(12));
        assert_eq!(extract_integer("abc"), None);
        assert_eq!(extract_integer(""), None);
    }

    #[test]
    fn test_extract_float() {
        assert_eq!(extract_float("9.2,"), Some(9.2));
        assert_eq!(extract_float("7"), Some(7.0));
        assert_eq!(extract_float("9.2.3"), Some(9.2));
        assert_eq!(extract_float("."), None);
        assert_eq!(extract_float("x9.2"), None);
    }

    #[test]
    fn test_extract_string_array() {
        let tags = extract_string_array(r#"["sci-fi", "adventure"]"#);
        assert_eq!(tags.as_slice(), ["sci-fi", "adventure"]);
    }

    #[test]
    fn test_extract_string_array_empty() {
        assert!(extract_string_array("[]").is_empty());
        assert!(extract_string_array("[ , , ]").is_empty());
        // Missing closing bracket: multi-line arrays are unsupported.
        assert!(extract_string_array(r#"["sci-fi","#).is_empty());
        assert!(extract_string_array("no brackets").is_empty());
    }

    #[test]
    fn test_extract_string_array_escapes() {
        let tags = extract_string_array(r#"["rock \"n\" roll"]"#);
        assert_eq!(tags.as_slice(), ["rock \"n\" roll"]);
    }
}
