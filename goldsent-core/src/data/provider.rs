//! Data provider trait and structured error types.
//!
//! The DataProvider trait abstracts over record sources (built-in samples,
//! spreadsheet upload, live feed) so callers can swap them and tests can mock.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::RawRecord;

/// Acquisition failures. Displayable in both CLI and TUI contexts.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by feed (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("feed refused access: HTTP {status}")]
    AccessDenied { status: u16 },

    #[error("feed returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("malformed feed response: {0}")]
    MalformedFeed(String),

    #[error("product '{product}' not found in feed")]
    ProductNotFound { product: String },

    #[error("unreadable spreadsheet: {0}")]
    SpreadsheetFormat(String),

    #[error("no usable records in {0}")]
    NoRecords(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DataError::NetworkUnreachable(_)
                | DataError::RateLimited { .. }
                | DataError::HttpStatus { .. }
        )
    }
}

/// Where the records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    Sample,
    Spreadsheet,
    Feed,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            DataSource::Sample => "sample",
            DataSource::Spreadsheet => "spreadsheet",
            DataSource::Feed => "feed",
        }
    }
}

/// Result of a successful acquisition.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub records: Vec<RawRecord>,
    pub source: DataSource,
}

/// A source of raw records, fetched as one batch.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<FetchResult, DataError>;
}
