// Logging setup shared by the binaries
// RUST_LOG wins; otherwise the configured filter applies.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Log to stderr
pub fn init_stderr(default_filter: &str) {
    // A second init (e.g. in tests) leaves the first subscriber in place
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to a file, for the terminal dashboard where stderr is the screen
pub fn init_file(default_filter: &str, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter(default_filter))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}
