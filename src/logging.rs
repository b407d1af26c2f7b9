//! Opt-in file logging.
//!
//! The game owns the terminal, so log output never goes to stdout or stderr.
//! Set `ROBO_RESCUE_LOG` to a file path to capture the `tracing` events the
//! crates emit; `RUST_LOG` filters them (default `info`).

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file
pub const LOG_PATH_ENV: &str = "ROBO_RESCUE_LOG";

/// Initializes the global subscriber when `ROBO_RESCUE_LOG` is set.
///
/// Returns `Ok(false)` when logging stays disabled.
pub fn init() -> Result<bool> {
    match std::env::var_os(LOG_PATH_ENV) {
        Some(path) if !path.is_empty() => {
            init_file(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Route `tracing` output to `path`, truncating it.
pub fn init_file(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // `try_init` only fails if a subscriber was already set, which is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
