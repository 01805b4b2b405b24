use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse '{}' as CSV: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: expected at least {required} fields, found {found}")]
    MalformedRow {
        row: usize,
        found: usize,
        required: usize,
    },

    #[error("row {row}: chart number is empty")]
    EmptyChartNumber { row: usize },

    #[error("row {row}: invalid date of service '{value}': {source}")]
    InvalidDate {
        row: usize,
        value: String,
        #[source]
        source: crate::parser::date::DateError,
    },

    #[error("row {row}: invalid {field} amount '{value}': {reason}")]
    InvalidAmount {
        row: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("report rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl ReconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReconError>;
