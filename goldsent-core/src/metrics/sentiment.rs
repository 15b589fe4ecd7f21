//! Sentiment score: a heuristic weighted sum, clamped to [-1, 1] and rounded
//! to two decimals. It summarizes the day's metrics for display only and
//! carries no claim of predictive validity.
//!
//! raw = pct_oi/10 + pct_vol/20 + block_trades/1000 + deliveries/1000

const OI_DIVISOR: f64 = 10.0;
const VOLUME_DIVISOR: f64 = 20.0;
const BLOCK_TRADE_DIVISOR: f64 = 1000.0;
const DELIVERY_DIVISOR: f64 = 1000.0;

pub const SCORE_MIN: f64 = -1.0;
pub const SCORE_MAX: f64 = 1.0;

pub fn sentiment_score(
    pct_oi_change: f64,
    pct_volume_change: f64,
    block_trades: Option<u64>,
    deliveries: Option<u64>,
) -> f64 {
    let raw = pct_oi_change / OI_DIVISOR
        + pct_volume_change / VOLUME_DIVISOR
        + block_trades.unwrap_or(0) as f64 / BLOCK_TRADE_DIVISOR
        + deliveries.unwrap_or(0) as f64 / DELIVERY_DIVISOR;
    round2(raw.clamp(SCORE_MIN, SCORE_MAX))
}

/// Round to two decimal places, exact halves to even (0.125 → 0.12).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
