//! Logging init: append to a file under the XDG state dir, or stderr when that fails.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Fetcher chatter (open failures, flush errors) at debug; everything else at info.
const DEFAULT_FILTER: &str = "info,devres=debug,devres_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("devres")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    Ok(log_dir.join("devres.log"))
}

/// Log to `~/.local/state/devres/devres.log`.
/// Returns Err when the file can't be opened so the caller can use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    // `&File` is `Write`, so every event shares the one append handle.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber: {}", e))?;

    tracing::info!("devres logging initialized at {}", path.display());
    Ok(())
}

pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
