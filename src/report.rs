//! Reporting collaborator.
//!
//! Runs each configured scan strategy over a price table and surfaces
//! the answers next to the known expected date, as plain text or JSON.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ScanError;
use crate::scanner::Strategy;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// One strategy's answer.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyAnswer {
    pub strategy: Strategy,
    pub date: String,
    /// `date` as a calendar day; absent for non-ISO labels.
    pub trading_day: Option<NaiveDate>,
    pub variance: Decimal,
    /// Line shown in the text report.
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub answers: Vec<StrategyAnswer>,
    pub expected: String,
}

impl Report {
    /// Scan `rows` with every strategy in `strategies`, in order.
    pub fn build<S: AsRef<str>>(
        rows: &[S],
        strategies: &[Strategy],
        expected: &str,
    ) -> std::result::Result<Self, ScanError> {
        let mut answers = Vec::with_capacity(strategies.len());

        for &strategy in strategies {
            let best = strategy.scan(rows)?;
            // The loop path reports the bare date, the pipeline path the
            // record itself.
            let summary = match strategy {
                Strategy::Loop => best.record.date.clone(),
                Strategy::Pipeline => best.record.to_string(),
            };
            if best.record.date != expected {
                warn!(
                    %strategy,
                    answer = %best.record.date,
                    expected,
                    "Answer disagrees with expected date"
                );
            }
            answers.push(StrategyAnswer {
                strategy,
                variance: best.variance(),
                trading_day: best.record.trading_day(),
                date: best.record.date,
                summary,
            });
        }

        Ok(Self {
            answers,
            expected: expected.to_string(),
        })
    }

    /// Whether every strategy produced the expected date.
    pub fn all_match(&self) -> bool {
        self.answers.iter().all(|a| a.date == self.expected)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialise report")
            }
        }
    }

    fn render_text(&self) -> String {
        let answers: String = self
            .answers
            .iter()
            .map(|a| format!("{} answer: {}\n", a.strategy, a.summary))
            .collect();
        format!("{answers}\nCorrect answer: {}", self.expected)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
