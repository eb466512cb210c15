use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a simulation run. None of them are retried.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append to {}: {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SimError {
    /// File or directory the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SimError::CreateDir { path, .. } | SimError::Append { path, .. } => path,
        }
    }
}

/// Rejected command-line values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid interval '{0}': expected a number of seconds")]
    IntervalNotANumber(String),

    #[error("invalid interval {0}: must be finite and not negative")]
    IntervalOutOfRange(f64),
}
