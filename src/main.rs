//! Contact Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{Assistant, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to keep the conversation on stdout clean)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Birthday window: {} days",
        config.birthday_window_days
    );

    let mut assistant = Assistant::new(config);
    assistant.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
