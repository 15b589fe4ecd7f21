//! Derived-metrics pipeline.
//!
//! Turns an ordered batch of `RawRecord`s into `DerivedRow`s:
//! percentage deltas against the previous row, a classified signal, a bounded
//! sentiment score, and a templated commentary sentence. The transform is pure
//! and recomputes the whole batch on every call; nothing is carried between
//! invocations.

pub mod change;
pub mod classify;
pub mod commentary;
pub mod sentiment;

pub use change::pct_change;
pub use classify::classify;
pub use commentary::commentary;
pub use sentiment::sentiment_score;

use thiserror::Error;

use crate::domain::{DerivedRow, RawRecord};

/// Validation failures raised by [`compute`]. Any failure aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("no records supplied")]
    EmptyInput,

    #[error("row {row} ({date}): required field '{field}' is missing")]
    InvalidInput {
        row: usize,
        date: String,
        field: &'static str,
    },
}

/// Compute derived rows for a chronologically ordered, non-empty batch.
///
/// Output length and order match the input. The first row has zero
/// percentage changes; a zero baseline on a later row also yields zero.
pub fn compute(records: &[RawRecord]) -> Result<Vec<DerivedRow>, MetricsError> {
    if records.is_empty() {
        return Err(MetricsError::EmptyInput);
    }

    let mut counts = Vec::with_capacity(records.len());
    for (row, rec) in records.iter().enumerate() {
        let volume = require(rec.volume, row, rec, "volume")?;
        let open_interest = require(rec.open_interest, row, rec, "open_interest")?;
        counts.push((volume, open_interest));
    }

    let mut rows = Vec::with_capacity(records.len());
    let mut prev: Option<(u64, u64)> = None;
    for (rec, &(volume, open_interest)) in records.iter().zip(&counts) {
        let (pct_oi_change, pct_volume_change) = match prev {
            Some((prev_volume, prev_oi)) => (
                pct_change(prev_oi, open_interest),
                pct_change(prev_volume, volume),
            ),
            None => (0.0, 0.0),
        };
        prev = Some((volume, open_interest));

        let signal = classify(pct_oi_change, pct_volume_change);
        rows.push(DerivedRow {
            date: rec.date.clone(),
            price: rec.price,
            volume,
            open_interest,
            oi_change: rec.oi_change,
            deliveries: rec.deliveries,
            block_trades: rec.block_trades,
            pct_oi_change,
            pct_volume_change,
            signal,
            sentiment_score: sentiment_score(
                pct_oi_change,
                pct_volume_change,
                rec.block_trades,
                rec.deliveries,
            ),
            commentary: commentary(&rec.date, signal, rec.price),
        });
    }

    Ok(rows)
}

fn require(
    value: Option<u64>,
    row: usize,
    rec: &RawRecord,
    field: &'static str,
) -> Result<u64, MetricsError> {
    value.ok_or_else(|| MetricsError::InvalidInput {
        row,
        date: rec.date.clone(),
        field,
    })
}
