//! RawRecord — one trading date of futures activity as supplied by a data source.

use serde::{Deserialize, Serialize};

/// Per-day futures activity before any derived metric is computed.
///
/// `date` is an opaque, already-ordered label (e.g. `"Mar 27"`); it is never
/// parsed as a calendar date. `volume` and `open_interest` are optional at the
/// type level so sources can hand over incomplete rows, but the metrics
/// pipeline rejects a row where either is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: String,
    pub price: Option<f64>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
    /// Exchange-reported open interest change, carried through untouched.
    pub oi_change: Option<i64>,
    pub deliveries: Option<u64>,
    pub block_trades: Option<u64>,
}

impl RawRecord {
    /// Record with the two required counts set and everything else absent.
    pub fn new(date: impl Into<String>, volume: u64, open_interest: u64) -> Self {
        Self {
            date: date.into(),
            price: None,
            volume: Some(volume),
            open_interest: Some(open_interest),
            oi_change: None,
            deliveries: None,
            block_trades: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_oi_change(mut self, oi_change: i64) -> Self {
        self.oi_change = Some(oi_change);
        self
    }

    pub fn with_deliveries(mut self, deliveries: u64) -> Self {
        self.deliveries = Some(deliveries);
        self
    }

    pub fn with_block_trades(mut self, block_trades: u64) -> Self {
        self.block_trades = Some(block_trades);
        self
    }
}
