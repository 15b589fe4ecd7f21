//! DerivedRow — a RawRecord plus its computed analytics.

use serde::{Deserialize, Serialize};

use super::Signal;

/// Output of the metrics pipeline, one per input record, in input order.
///
/// Required counts are concrete here; `deliveries` and `block_trades` stay
/// optional so an unknown value is not confused with a reported zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    pub date: String,
    pub price: Option<f64>,
    pub volume: u64,
    pub open_interest: u64,
    pub oi_change: Option<i64>,
    pub deliveries: Option<u64>,
    pub block_trades: Option<u64>,
    pub pct_oi_change: f64,
    pub pct_volume_change: f64,
    pub signal: Signal,
    /// Heuristic composite in [-1, 1], two decimals. Not a calibrated predictor.
    pub sentiment_score: f64,
    pub commentary: String,
}
