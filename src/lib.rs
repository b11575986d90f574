//! Stock variance scanner.
//!
//! Library crate exposing the scanner and its collaborators for use by
//! integration tests and the binary entry point.

pub mod config;
pub mod dataset;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;

pub use crate::error::{ParseError, ParseErrorKind, ScanError};
pub use crate::scanner::{greatest_variance_date, scan_loop, scan_pipeline, Strategy};
pub use crate::types::{DailyRecord, Maximum};
