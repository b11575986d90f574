//! Variance scanner.
//!
//! Parses comma-separated price rows (`Date,Open,High,Low,Close,Volume,Adj Close`)
//! and finds the day whose opening and closing prices are furthest apart.
//! The first row is always a header and is never compared.
//!
//! Two equivalent code paths are provided: an explicit loop over the rows
//! and a lazy iterator fold. Both keep the first record seen when several
//! share the greatest variance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::error::{ParseError, ParseErrorKind, Result, ScanError};
use crate::types::{DailyRecord, Maximum};

// ---------------------------------------------------------------------------
// Row layout
// ---------------------------------------------------------------------------

/// Number of comma-separated fields in every row.
pub const FIELD_COUNT: usize = 7;

const DATE_FIELD: usize = 0;
const OPEN_FIELD: usize = 1;
const CLOSE_FIELD: usize = 4;

/// Parse a data row into a `DailyRecord`.
///
/// `line` is the 1-based line number used in error messages.
pub fn parse_row(line: usize, row: &str) -> std::result::Result<DailyRecord, ParseError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError {
            line,
            kind: ParseErrorKind::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            },
        });
    }

    let open = parse_price(line, "open", fields[OPEN_FIELD])?;
    let close = parse_price(line, "close", fields[CLOSE_FIELD])?;

    Ok(DailyRecord::new(fields[DATE_FIELD], open, close))
}

fn parse_price(
    line: usize,
    field: &'static str,
    raw: &str,
) -> std::result::Result<Decimal, ParseError> {
    // Exact parsing: text that would need rounding or overflows is an
    // error, never a silently different price.
    let value = Decimal::from_str_exact(raw).map_err(|_| {
        let value = raw.to_string();
        let kind = if is_decimal_text(raw) {
            ParseErrorKind::UnrepresentablePrice { field, value }
        } else {
            ParseErrorKind::InvalidPrice { field, value }
        };
        ParseError { line, kind }
    })?;

    if value < Decimal::ZERO {
        return Err(ParseError {
            line,
            kind: ParseErrorKind::NegativePrice {
                field,
                value: raw.to_string(),
            },
        });
    }

    Ok(value)
}

/// Plain decimal syntax: optional sign, digits, at most one point.
fn is_decimal_text(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    !(int_part.is_empty() && frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

/// Lazily parse every row after the header, yielding `(index, record)`
/// where `index` is the zero-based data row position.
pub fn records<S: AsRef<str>>(
    rows: &[S],
) -> impl Iterator<Item = std::result::Result<(usize, DailyRecord), ParseError>> + '_ {
    rows.iter()
        .skip(1)
        .enumerate()
        .map(|(index, row)| parse_row(index + 2, row.as_ref()).map(|rec| (index, rec)))
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Which code path performs the scan. Both produce the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Explicit loop with a running maximum.
    Loop,
    /// Iterator fold over lazily parsed records.
    Pipeline,
}

impl Strategy {
    pub fn scan<S: AsRef<str>>(self, rows: &[S]) -> Result<Maximum> {
        match self {
            Strategy::Loop => scan_loop(rows),
            Strategy::Pipeline => scan_pipeline(rows),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Loop => write!(f, "loop"),
            Strategy::Pipeline => write!(f, "pipeline"),
        }
    }
}

/// Scan with an explicit loop.
///
/// The running maximum starts at the first data row and is replaced only
/// on a strict improvement.
pub fn scan_loop<S: AsRef<str>>(rows: &[S]) -> Result<Maximum> {
    let mut best: Option<Maximum> = None;

    for (offset, row) in rows.iter().enumerate().skip(1) {
        let record = parse_row(offset + 1, row.as_ref())?;
        let index = offset - 1;

        match &best {
            Some(current) if record.variance() <= current.variance() => continue,
            Some(current) => debug!(
                date = %record.date,
                variance = %record.variance(),
                previous = %current.variance(),
                "New maximum variance"
            ),
            None => {}
        }
        best = Some(Maximum::new(index, record));
    }

    let best = best.ok_or(ScanError::EmptyInput)?;
    info!(
        strategy = "loop",
        rows = rows.len() - 1,
        date = %best.date(),
        variance = %best.variance(),
        "Scan complete"
    );
    Ok(best)
}

/// Scan with an iterator fold over `records`.
pub fn scan_pipeline<S: AsRef<str>>(rows: &[S]) -> Result<Maximum> {
    let best = fold_maximum(records(rows))?.ok_or(ScanError::EmptyInput)?;
    info!(
        strategy = "pipeline",
        rows = rows.len().saturating_sub(1),
        date = %best.date(),
        variance = %best.variance(),
        "Scan complete"
    );
    Ok(best)
}

/// Scan the data rows in independent shards of `shard_size` rows and
/// combine the partial maxima.
///
/// Partial results are merged with `Maximum::merge`, so ties still resolve
/// to the earliest row in input order.
pub fn scan_shards<S: AsRef<str>>(rows: &[S], shard_size: usize) -> Result<Maximum> {
    let shard_size = shard_size.max(1);
    let data = rows.get(1..).unwrap_or_default();

    let mut best: Option<Maximum> = None;
    for (shard, chunk) in data.chunks(shard_size).enumerate() {
        let base = shard * shard_size;
        let parsed = chunk.iter().enumerate().map(|(i, row)| {
            let index = base + i;
            parse_row(index + 2, row.as_ref()).map(|rec| (index, rec))
        });

        if let Some(partial) = fold_maximum(parsed)? {
            debug!(shard, date = %partial.date(), variance = %partial.variance(), "Shard maximum");
            best = Some(match best {
                Some(current) => current.merge(partial),
                None => partial,
            });
        }
    }

    best.ok_or(ScanError::EmptyInput)
}

/// Convenience wrapper: date of the day with the greatest variance.
pub fn greatest_variance_date<S: AsRef<str>>(rows: &[S]) -> Result<String> {
    scan_pipeline(rows).map(|best| best.record.date)
}

/// Scan newline-separated text, header on the first line.
pub fn scan_text(text: &str, strategy: Strategy) -> Result<Maximum> {
    let rows: Vec<&str> = text.lines().collect();
    strategy.scan(&rows)
}

fn fold_maximum<I>(mut parsed: I) -> Result<Option<Maximum>>
where
    I: Iterator<Item = std::result::Result<(usize, DailyRecord), ParseError>>,
{
    parsed.try_fold(None, |best: Option<Maximum>, item| {
        let (index, record) = item?;
        let candidate = Maximum::new(index, record);
        Ok::<_, ScanError>(Some(match best {
            Some(current) => current.merge(candidate),
            None => candidate,
        }))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
