//! Tracing subscriber setup. Events go to a file because stdout and stderr
//! are owned by the terminal UI while a game is running.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Pick the filter directive: a non-blank `RUST_LOG` wins over the configured one.
fn filter_directive(configured: &str, env: Option<String>) -> String {
    match env {
        Some(value) if !value.trim().is_empty() => value,
        _ => configured.to_string(),
    }
}

/// Parse a filter directive into an [`EnvFilter`].
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
        filter: directive.to_string(),
        source,
    })
}

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` without installing anything when no log file is
/// configured.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let directive = filter_directive(
        &config.filter,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let filter = build_filter(&directive)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::FileOpen {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    Ok(true)
}
