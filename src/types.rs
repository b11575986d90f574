//! Shared types for the variance scan.
//!
//! A `DailyRecord` is the slice of a price row the scan cares about,
//! and a `Maximum` is the best record seen so far together with its
//! position in the input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Date format used by the price table.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Daily record
// ---------------------------------------------------------------------------

/// One trading day: its date label plus opening and closing price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    /// Date label exactly as supplied (ISO `YYYY-MM-DD` in practice).
    pub date: String,
    pub open: Decimal,
    pub close: Decimal,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>, open: Decimal, close: Decimal) -> Self {
        Self {
            date: date.into(),
            open,
            close,
        }
    }

    /// Absolute difference between opening and closing price.
    pub fn variance(&self) -> Decimal {
        (self.open - self.close).abs()
    }

    /// The date as a calendar day, if the label is an ISO date.
    pub fn trading_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Orders records by variance, ascending.
    pub fn cmp_variance(&self, other: &Self) -> Ordering {
        self.variance().cmp(&other.variance())
    }
}

impl fmt::Display for DailyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} had variance = {:.3}", self.date, self.variance())
    }
}

// ---------------------------------------------------------------------------
// Running maximum
// ---------------------------------------------------------------------------

/// The record with the greatest variance in some run of input rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maximum {
    /// Zero-based position among the data rows (header excluded).
    pub index: usize,
    pub record: DailyRecord,
}

impl Maximum {
    pub fn new(index: usize, record: DailyRecord) -> Self {
        Self { index, record }
    }

    pub fn variance(&self) -> Decimal {
        self.record.variance()
    }

    pub fn date(&self) -> &str {
        &self.record.date
    }

    /// Combine two partial maxima.
    ///
    /// The larger variance wins; on equal variance the one with the lower
    /// index wins, so the result does not depend on merge order.
    pub fn merge(self, other: Maximum) -> Maximum {
        match self.record.cmp_variance(&other.record) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal if self.index <= other.index => self,
            Ordering::Equal => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
