//! Acquisition → ordering → metrics, with errors kept per layer.
//!
//! A fetch failure, a validation failure and a rendering failure each surface
//! as a distinct `DashboardError` variant so one never masks another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::{order_records, DataError, DataProvider, DataSource, RecordOrder};
use crate::domain::DerivedRow;
use crate::metrics::{compute, MetricsError};
use crate::report::ReportError;

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    Network,
    Data,
    Calc,
    Render,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NET",
            ErrorCategory::Data => "DATA",
            ErrorCategory::Calc => "CALC",
            ErrorCategory::Render => "RENDER",
            ErrorCategory::Other => "ERR",
        }
    }
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("data acquisition failed: {0}")]
    Acquisition(#[from] DataError),

    #[error("invalid records: {0}")]
    Validation(#[from] MetricsError),

    #[error("rendering failed: {0}")]
    Render(#[from] ReportError),
}

impl DashboardError {
    /// One-line message for display to the user.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Acquisition(DataError::NetworkUnreachable(detail)) => {
                format!("Could not reach the market data feed ({detail}). Check the URL and network.")
            }
            DashboardError::Acquisition(
                e @ (DataError::SpreadsheetFormat(_) | DataError::NoRecords(_)),
            ) => format!("The uploaded spreadsheet could not be used: {e}."),
            DashboardError::Validation(MetricsError::EmptyInput) => {
                "No records to analyze.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// The layer that failed.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::Acquisition(DataError::NetworkUnreachable(_))
            | DashboardError::Acquisition(DataError::RateLimited { .. })
            | DashboardError::Acquisition(DataError::AccessDenied { .. })
            | DashboardError::Acquisition(DataError::HttpStatus { .. }) => ErrorCategory::Network,
            DashboardError::Acquisition(_) => ErrorCategory::Data,
            DashboardError::Validation(_) => ErrorCategory::Calc,
            DashboardError::Render(_) => ErrorCategory::Render,
        }
    }
}

/// A computed batch ready for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub source: DataSource,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<DerivedRow>,
}

/// Fetch from `provider`, apply `order`, and compute derived rows.
pub fn analyze(
    provider: &dyn DataProvider,
    order: RecordOrder,
) -> Result<Analysis, DashboardError> {
    let fetched = provider.fetch()?;
    log::debug!(
        "{}: {} records fetched",
        provider.name(),
        fetched.records.len()
    );
    let records = order_records(fetched.records, order);
    let rows = compute(&records)?;
    Ok(Analysis {
        source: fetched.source,
        generated_at: Utc::now(),
        rows,
    })
}
