//! Configuration loading from TOML.
//!
//! `config.toml` only chooses which scan code paths run and how the
//! answer is printed. Every key is optional; a missing file means defaults.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::report::ReportFormat;
use crate::scanner::Strategy;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub scan: ScanConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScanConfig {
    /// Strategies to run, in report order.
    pub strategies: Vec<Strategy>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strategies: vec![Strategy::Loop, Strategy::Pipeline],
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!(path, "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate configuration text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.scan.strategies.is_empty() {
            bail!("scan.strategies must name at least one strategy");
        }
        Ok(config)
    }
}
