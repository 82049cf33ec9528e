//! File-backed tracing setup.
//!
//! The TUI owns stdout while the alternate screen is active, so log lines go
//! to a file instead. The level comes from `RUST_LOG` when set, otherwise
//! `roshambo=info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_FILTER: &str = "roshambo=info";

/// `RUST_LOG` if it parses, otherwise [`DEFAULT_FILTER`]
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber appending to `path`.
///
/// Calling this twice is harmless; the second subscriber is dropped.
pub fn init_file_logging(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    fmt()
        .with_env_filter(filter_from_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok();

    Ok(())
}
