//! Logging init for the surl CLI.
//!
//! Events go to a file under the XDG state directory, keeping stdout free
//! for command output. When the state directory cannot be used, callers
//! switch to the stderr variant.

use std::fs;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,surl=debug"))
}

/// Initialize logging to `surl.log` under the XDG state directory
/// (`~/.local/state/surl` by default). Returns Err when the directory or
/// file cannot be opened; the global subscriber is left uninstalled and
/// `init_logging_stderr` may be called instead.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("surl")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("surl.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("surl logging to {}", log_path.display());

    Ok(())
}

/// Stderr-only logging, for environments without a usable state directory.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
