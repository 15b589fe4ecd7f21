//! Reporting — export and text rendering of derived rows.

pub mod export;
pub mod text;

pub use export::{write_csv, write_csv_file, write_json, write_json_file};
pub use text::{render_commentary, render_table};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
