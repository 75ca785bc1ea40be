//! Error types for data preparation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data preparation operations.
pub type PrepResult<T> = Result<T, PrepError>;

/// Errors that can occur while preparing firmware data.
#[derive(Debug, Error)]
pub enum PrepError {
    /// The input file does not exist.
    #[error("input file not found: '{}'", path.display())]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// A numeric literal inside the array body does not fit a sample.
    #[error("sample literal '{literal}' on line {line} is out of range")]
    SampleOutOfRange {
        /// The literal as written in the source.
        literal: String,
        /// 1-based line number.
        line: usize,
    },

    /// Any other read or write failure.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl PrepError {
    /// Classifies a failure to read `path`, separating a missing file from
    /// other I/O errors.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Wraps a write failure on `path`.
    pub fn from_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
