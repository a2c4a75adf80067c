use anyhow::{Context, Result};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::JobboardConfig;

fn filter(cfg: &JobboardConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level))
}

/// Logs to `<data dir>/jobboard.log`; the terminal belongs to the UI while it runs.
pub fn init_file(cfg: &JobboardConfig) -> Result<()> {
    let path = cfg.log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(cfg))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Logs to stderr, for the headless subcommands.
pub fn init_stderr(cfg: &JobboardConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(cfg))
        .with_writer(std::io::stderr)
        .init();
}
