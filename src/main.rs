//! Postbar - Posten.no delivery dates for your status bar
//!
//! One invocation, one output: either a single color-coded status-bar line
//! with the soonest delivery date, or a desktop notification listing all
//! upcoming dates. Results are cached for four hours between invocations.
//!
//! Every error path prints a red placeholder token and exits 0, so the
//! status-bar host keeps rendering instead of flagging a broken command.
//! The error kind itself goes to stderr via tracing.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use postbar::cache::CacheStore;
use postbar::cli::{Cli, Mode};
use postbar::config::{Config, ConfigError};
use postbar::error::{error_line, AppError};
use postbar::postal::{self, PostalClient, PostalError};
use postbar::{dates, notify, output};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.mode()).await {
        tracing::error!(error = %e, "invocation failed");
        println!("{}", error_line(&e.token()));
    }
    // Exit 0 on every path: the status-bar host treats non-zero as a
    // broken module.
}

async fn run(mode: Mode) -> Result<(), AppError> {
    let config_path = Config::default_path().ok_or(ConfigError::NoProjectDirs)?;
    let config = Config::load(&config_path)?;
    let cache = CacheStore::new().ok_or(ConfigError::NoProjectDirs)?;
    let client = PostalClient::new()?;

    let snapshot = postal::load_or_refresh(&cache, || client.fetch(&config.postal_code)).await?;

    match mode {
        Mode::Bar => {
            let first = snapshot
                .next_delivery_days
                .first()
                .ok_or(PostalError::NoData)?;
            match dates::parse_delivery_date(first) {
                Ok(date) => tracing::debug!(%date, "next delivery date"),
                Err(e) => tracing::debug!(error = %e, "no calendar date in first entry"),
            }
            println!("{}", output::bar_output(first, &config).render());
        }
        Mode::Notify => {
            let digest = output::notification_digest(&snapshot.next_delivery_days);
            notify::send_notification(&digest)?;
        }
    }
    Ok(())
}
