//! Gold Sentiment Core — derived analytics for gold futures activity.
//!
//! This crate contains:
//! - Domain types (raw per-day records, derived rows, signals)
//! - The metrics pipeline: percentage deltas, signal classification,
//!   bounded sentiment score, templated commentary
//! - Data acquisition (built-in sample, spreadsheet upload, live JSON feed)
//! - TOML configuration for the acquisition layer
//! - CSV/JSON export and plain-text rendering

pub mod config;
pub mod data;
pub mod domain;
pub mod metrics;
pub mod pipeline;
pub mod report;

pub use config::DashboardConfig;
pub use domain::{DerivedRow, RawRecord, Signal};
pub use metrics::{compute, MetricsError};
pub use pipeline::{analyze, Analysis, DashboardError, ErrorCategory};
