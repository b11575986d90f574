//! Entry point. Loads configuration, initialises structured logging,
//! scans the embedded price table with each configured strategy and
//! prints the answers next to the expected date.

use anyhow::Result;
use tracing::{info, warn};

use stock_variance::config::{AppConfig, DEFAULT_CONFIG_PATH};
use stock_variance::dataset::{EXPECTED_ANSWER, STOCK_DATA};
use stock_variance::report::Report;

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let cfg = AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
    info!(
        strategies = ?cfg.scan.strategies,
        format = ?cfg.report.format,
        rows = STOCK_DATA.len() - 1,
        "Scanning embedded price table"
    );

    let report = Report::build(&STOCK_DATA, &cfg.scan.strategies, EXPECTED_ANSWER)?;
    if !report.all_match() {
        warn!(expected = EXPECTED_ANSWER, "Not every strategy found the expected date");
    }

    println!("{}", report.render(cfg.report.format)?);
    Ok(())
}

/// Initialise the `tracing` subscriber.
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stock_variance=info"));

    let json_logging = std::env::var("STOCK_VARIANCE_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
