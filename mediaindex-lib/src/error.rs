use std::path::PathBuf;

use thiserror::Error;

use mediaindex_lists::ListError;

/// Errors that can occur while running one of the index tools.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Input path does not exist
    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// Scan root exists but is not a directory
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Input could not be read or parsed
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ListError,
    },

    /// Output could not be written
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ListError,
    },

    /// Settings file could not be read or parsed
    #[error("Settings error: {0}")]
    Settings(String),

    /// Other I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IndexError {
    pub fn read(path: impl Into<PathBuf>, source: impl Into<ListError>) -> Self {
        Self::Read {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: impl Into<ListError>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
