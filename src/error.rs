use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a cleaning run. No kind is recoverable; the
/// pipeline stops at the first error and makes no partial-output guarantee.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("column not found: {0:?}")]
    ColumnNotFound(String),

    #[error("malformed row {row}: expected {expected} fields, found {actual}")]
    MalformedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl CleanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
