/// Error types for the consolidation pipeline
///
/// Every failure is fatal for the run: nothing here is retried, and each
/// variant carries the path needed to find the offending input.
use crate::types::ResultKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsolidateError {
    #[error("Could not handle file '{}': no result kind matches its name", path.display())]
    UnclassifiableFile { path: PathBuf },

    #[error("Failed to parse '{}': {reason} (content: {fragment:?})", path.display())]
    Parse {
        path: PathBuf,
        fragment: String,
        reason: String,
    },

    #[error("No such directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error(
        "Both '{}' and '{}' are {kind} results for the same tool",
        previous.display(),
        path.display()
    )]
    DuplicateScalar {
        kind: ResultKind,
        path: PathBuf,
        previous: PathBuf,
    },

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid manifest '{}': {reason}", path.display())]
    Manifest { path: PathBuf, reason: String },

    #[error("Report error: {0}")]
    Report(String),
}

pub type Result<T> = std::result::Result<T, ConsolidateError>;

impl ConsolidateError {
    /// Wrap an I/O error with the path that produced it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConsolidateError::Io {
            source,
            path: path.into(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ConsolidateError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ConsolidateError::Report(e.to_string())
    }
}

impl From<serde_json::Error> for ConsolidateError {
    fn from(e: serde_json::Error) -> Self {
        ConsolidateError::Report(e.to_string())
    }
}
