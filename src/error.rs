// src/error.rs
use thiserror::Error;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

/// Anything that aborts a run. Nothing here is retried or recovered.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected document structure: {0}")]
    Structure(String),

    #[error("table row {row}: {source}")]
    Parse {
        /// 1-based position within the table body
        row: usize,
        #[source]
        source: ParseError,
    },

    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
}

/// A table row that cannot become a `Row`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected at least {expected} cells, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("{column}: {value:?} is not a non-negative integer")]
    InvalidInteger { column: &'static str, value: String },

    #[error("{column}: {value:?} is not a non-negative number")]
    InvalidReal { column: &'static str, value: String },
}
