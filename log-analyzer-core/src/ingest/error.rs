use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    //-------------------------------------------------------------------------
    // IO / Discovery
    //-------------------------------------------------------------------------
    #[error("failed to list log directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error(transparent)]
    ParseBudgetExceeded(#[from] BudgetExceeded),
}

impl AnalyzeError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// Diagnostic counts for a file whose parse failure ratio is over budget.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error(
    "log parse error budget exceeded: {:.2}% of {total_lines} lines failed (allowed {:.2}%)",
    .error_rate * 100.0,
    .error_threshold * 100.0
)]
pub struct BudgetExceeded {
    pub error_rate: f64,
    pub error_threshold: f64,
    pub total_lines: u64,
    pub errors: u64,
}
