//! Log setup.
//!
//! The terminal belongs to the UI, so events go to a file only. The filter is
//! read from `POSITIVELY_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use color_eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::state::AppConfig;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "POSITIVELY_LOG";

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "positively.log";

/// Default log location inside the config directory.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    AppConfig::config_dir()
        .ok()
        .map(|dir| dir.join(LOG_FILE_NAME))
}

/// Builds the filter from `directive`, falling back to [`DEFAULT_FILTER`].
fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to `log_file`.
///
/// Without a path (and no config directory) logging stays disabled.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let directive = std::env::var(LOG_ENV).ok();
    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_target(true)
        .with_ansi(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(build_filter(directive.as_deref()))
        .with(file_layer)
        .try_init()?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
