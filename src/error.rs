//! Error types for parsing and scanning price rows.

use thiserror::Error;

/// What went wrong with a single row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field} price {value:?} is not a valid decimal number")]
    InvalidPrice { field: &'static str, value: String },

    #[error("{field} price {value} cannot be represented exactly")]
    UnrepresentablePrice { field: &'static str, value: String },

    #[error("{field} price {value} is negative")]
    NegativePrice { field: &'static str, value: String },
}

/// A malformed data row. `line` is 1-based and counts the header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Failure of a variance scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Nothing left to compare once the header is removed.
    #[error("no data rows after the header")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_names_line() {
        let err = ParseError {
            line: 3,
            kind: ParseErrorKind::FieldCount { expected: 7, found: 2 },
        };
        assert_eq!(
            err.to_string(),
            "line 3: expected 7 comma-separated fields, found 2"
        );
    }

    #[test]
    fn test_scan_error_wraps_parse_error() {
        let err: ScanError = ParseError {
            line: 2,
            kind: ParseErrorKind::InvalidPrice {
                field: "open",
                value: "abc".into(),
            },
        }
        .into();
        assert!(matches!(err, ScanError::Parse(ParseError { line: 2, .. })));
        assert!(err.to_string().contains("\"abc\""));
    }
}
