//! Address Book - demonstration entry point
//!
//! Runs the sample scenario and prints each state of the book to stdout.

use address_book::{demo, Config};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let loaded = Config::from_env();

    // Logs go to stderr so stdout only carries the report. If the config is
    // unusable, fall back to the default level so the failure still gets logged.
    let (filter, filter_error) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match loaded.as_ref().map(Config::env_filter) {
            Ok(Ok(filter)) => (filter, None),
            Ok(Err(e)) => (Config::default().env_filter()?, Some(e)),
            Err(_) => (Config::default().env_filter()?, None),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = filter_error {
        error!("Failed to load configuration: {}", e);
        return Err(e.into());
    }

    let config = match loaded {
        Ok(cfg) => {
            info!(edit_policy = ?cfg.edit_policy, "Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::run(&mut out, config.edit_policy) {
        error!("Demonstration failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
