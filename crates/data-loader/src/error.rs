//! Error types for the data-loader crate.
//!
//! Two families of failure exist while loading a movie file:
//! - I/O failures (`FileNotFound`, `IoError`) are fatal for the whole load
//! - line-level failures (`ParseError`, `FieldCountMismatch`) only reject
//!   the offending line; the loader records them and keeps going

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during data loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

impl DataLoadError {
    /// Line number the error refers to, if it is a line-level error
    pub fn line(&self) -> Option<usize> {
        match self {
            DataLoadError::ParseError { line, .. }
            | DataLoadError::FieldCountMismatch { line, .. } => Some(*line),
            DataLoadError::FileNotFound { .. } | DataLoadError::IoError(_) => None,
        }
    }

    /// Whether the loader can skip past this error and continue
    pub fn is_recoverable(&self) -> bool {
        self.line().is_some()
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_level_errors_are_recoverable() {
        let err = DataLoadError::FieldCountMismatch {
            expected: 4,
            found: 2,
            line: 7,
        };
        assert_eq!(err.line(), Some(7));
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Expected 4 fields but found 2 in line 7");
    }

    #[test]
    fn test_io_errors_are_fatal() {
        let err = DataLoadError::FileNotFound {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.line(), None);
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Failed to open file: missing.csv");
    }
}
