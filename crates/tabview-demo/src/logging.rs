#![forbid(unsafe_code)]

//! Log file setup.
//!
//! The UI owns the terminal, so logs only ever go to a file. Filtering
//! follows `RUST_LOG` when set and defaults to debug for the tabview crates.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::DemoError;

const DEFAULT_FILTER: &str = "tabview=debug,tabview_demo=debug";

/// Install a global fmt subscriber writing to `path`.
///
/// A subscriber that is already installed is left in place.
pub fn init(path: &Path) -> Result<(), DemoError> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init();
    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}
