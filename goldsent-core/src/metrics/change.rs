//! Percentage change against the immediately preceding row.
//!
//! pct[t] = (x[t] - x[t-1]) / x[t-1] * 100
//! A zero baseline yields 0 rather than NaN/inf so downstream fields stay finite.

/// Percentage change from `prev` to `curr`. Returns 0 when `prev` is 0.
pub fn pct_change(prev: u64, curr: u64) -> f64 {
    if prev == 0 {
        return 0.0;
    }
    let prev = prev as f64;
    (curr as f64 - prev) / prev * 100.0
}
