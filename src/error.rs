//! Error taxonomy for report generation.

use std::io;
use std::path::PathBuf;

/// The error type for every fallible operation in `fsreport`.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The directory to analyze does not exist.
    #[error("path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// The report path's extension does not select any writer.
    #[error("unsupported report extension '{extension}'. Supported: {}", supported.join(", "))]
    UnsupportedFormat {
        extension: String,
        supported: Vec<&'static str>,
    },

    /// Reading an entry during traversal, or creating/writing the report, failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
