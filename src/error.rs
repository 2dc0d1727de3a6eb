//! Error types for loading tasks and producing the report.
//!
//! Every failure is fatal to the run: the program either writes the complete
//! document or writes nothing. Each variant carries the failing path and
//! cause so the message printed to the user identifies both.

use std::path::PathBuf;

use thiserror::Error;

/// Failure surfaced by the load/generate/write pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not a valid JSON array of task records.
    #[error("failed to parse {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The task list violates the caller contract (empty, or a record is
    /// missing a required field).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The output file could not be written.
    #[error("failed to write {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        ReportError::InvalidInput { reason: reason.into() }
    }
}
