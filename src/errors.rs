use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("'{0}' cannot be used as a note name")]
    InvalidNoteName(String),

    #[error("Could not start background task: {0}")]
    Spawn(#[source] io::Error),

    #[error("Background task was cancelled")]
    Cancelled,

    #[error("Background task stopped without a result")]
    TaskFailed,
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
