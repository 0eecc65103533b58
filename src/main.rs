//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout.

use anyhow::Result;
use assistant_bot::{run_session, AddressBook, Config};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so stdout carries just the conversation)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config {
        error!("Failed to load configuration: {}", e);
        return Err(e.into());
    }
    info!("Configuration loaded successfully");

    let mut book = AddressBook::new();
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    if let Err(e) = run_session(stdin, stdout, &mut book).await {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    info!(contacts = book.len(), "Assistant bot shutdown complete");
    Ok(())
}
