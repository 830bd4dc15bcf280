//! Logging setup. The terminal is in raw alternate-screen mode while the app runs, so log
//! records go to a file and nothing is installed when no file is configured.

use crate::errors::{AppError, AppResult};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

const DEFAULT_FILTER: &str = "info";

/// Install the file logger. Returns whether a logger was installed by this call.
pub fn init_logging(log_file: Option<&Path>) -> AppResult<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::io(path, e))?;

    let installed = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .is_ok();

    if installed {
        log::info!("Logging to {}", path.display());
    }
    Ok(installed)
}
