//! Signal classification from fixed thresholds. First matching rule wins;
//! all comparisons are strict.

use crate::domain::Signal;

/// `pct_oi_change` must exceed this (with volume) for a bullish spike.
pub const SPIKE_OI_PCT: f64 = 5.0;
/// `pct_volume_change` must exceed this for a bullish spike.
pub const SPIKE_VOLUME_PCT: f64 = 2.0;
/// `pct_oi_change` below this is an open interest drop.
pub const DROP_OI_PCT: f64 = -3.0;

pub fn classify(pct_oi_change: f64, pct_volume_change: f64) -> Signal {
    if pct_oi_change > SPIKE_OI_PCT && pct_volume_change > SPIKE_VOLUME_PCT {
        Signal::BullishSpike
    } else if pct_oi_change < DROP_OI_PCT {
        Signal::OiDrop
    } else {
        Signal::Stable
    }
}
