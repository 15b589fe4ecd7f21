//! End-to-end checks of the metrics pipeline against hand-computed values.

use goldsent_core::data::{RecordOrder, SampleProvider};
use goldsent_core::{analyze, compute, MetricsError, RawRecord, Signal};

const EPS: f64 = 1e-9;

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

fn sample_like() -> Vec<RawRecord> {
    vec![
        RawRecord::new("Mar 26", 239_000, 467_637),
        RawRecord::new("Mar 27", 248_000, 512_637)
            .with_deliveries(123)
            .with_block_trades(2453),
        RawRecord::new("Mar 28", 250_631, 574_824)
            .with_deliveries(521)
            .with_block_trades(3071),
    ]
}

#[test]
fn scenario_a_second_row_is_bullish_spike() {
    let rows = compute(&sample_like()).unwrap();
    assert_eq!(rows.len(), 3);

    assert_approx(rows[1].pct_oi_change, 45_000.0 / 467_637.0 * 100.0);
    assert_approx(rows[1].pct_volume_change, 9_000.0 / 239_000.0 * 100.0);
    assert_eq!((rows[1].pct_oi_change * 100.0).round() / 100.0, 9.62);
    assert_eq!((rows[1].pct_volume_change * 100.0).round() / 100.0, 3.77);
    assert_eq!(rows[1].signal, Signal::BullishSpike);
    // 0.962 + 0.188 + 2.453 + 0.123 clamps to the ceiling
    assert_eq!(rows[1].sentiment_score, 1.0);
}

#[test]
fn scenario_a_third_row_is_stable_on_weak_volume() {
    let rows = compute(&sample_like()).unwrap();

    assert_approx(rows[2].pct_oi_change, 62_187.0 / 512_637.0 * 100.0);
    assert_approx(rows[2].pct_volume_change, 2_631.0 / 248_000.0 * 100.0);
    // OI is up 12.13% but volume only 1.06%, below the spike threshold
    assert_eq!(rows[2].signal, Signal::Stable);
    assert_eq!(rows[2].sentiment_score, 1.0);
}

#[test]
fn scenario_b_open_interest_drop() {
    let rows = compute(&[
        RawRecord::new("Apr 01", 200_000, 500_000),
        RawRecord::new("Apr 02", 200_000, 480_000)
            .with_deliveries(0)
            .with_block_trades(0),
    ])
    .unwrap();

    assert_approx(rows[1].pct_oi_change, -4.0);
    assert_eq!(rows[1].signal, Signal::OiDrop);
    assert_eq!(rows[1].sentiment_score, -0.4);
    assert!(rows[1].commentary.contains("decline in open interest"));
}

#[test]
fn first_row_has_no_baseline() {
    let rows = compute(&sample_like()).unwrap();
    assert_eq!(rows[0].pct_oi_change, 0.0);
    assert_eq!(rows[0].pct_volume_change, 0.0);
    assert_eq!(rows[0].signal, Signal::Stable);
}

#[test]
fn commentary_without_price_contains_date() {
    let rows = compute(&[RawRecord::new("Mar 27", 1, 1)]).unwrap();
    assert_eq!(rows[0].signal, Signal::Stable);
    assert!(rows[0].commentary.contains("Mar 27"));
    assert!(!rows[0].commentary.contains('$'));
}

#[test]
fn sample_provider_matches_dashboard_output() {
    let analysis = analyze(&SampleProvider, RecordOrder::AsIngested).unwrap();
    let signals: Vec<Signal> = analysis.rows.iter().map(|r| r.signal).collect();
    assert_eq!(signals, [Signal::Stable, Signal::BullishSpike, Signal::Stable]);
    assert_eq!(
        analysis.rows[1].commentary,
        "On Mar 27, market sentiment turned notably bullish as open interest and trading \
         volume increased significantly. Gold prices advanced to $2204.7, reflecting strong \
         institutional participation."
    );
    assert_eq!(
        analysis.rows[0].commentary,
        "On Mar 26, gold markets exhibited stability around $2188.4, with no significant \
         shifts in open interest or volume to indicate directional conviction."
    );
}

#[test]
fn missing_required_field_aborts_batch() {
    let mut records = sample_like();
    records[2].volume = None;
    let err = compute(&records).unwrap_err();
    assert_eq!(
        err,
        MetricsError::InvalidInput {
            row: 2,
            date: "Mar 28".into(),
            field: "volume",
        }
    );
}

#[test]
fn extreme_block_trades_clamp() {
    let rows = compute(&[RawRecord::new("d", 1, 1).with_block_trades(10_000_000)]).unwrap();
    assert_eq!(rows[0].sentiment_score, 1.0);
}

#[test]
fn exact_half_scores_round_to_even() {
    let rows = compute(&[RawRecord::new("Mar 26", 100, 100).with_deliveries(125)]).unwrap();
    assert_eq!(rows[0].sentiment_score, 0.12);

    let rows = compute(&[RawRecord::new("Mar 26", 100, 100).with_block_trades(625)]).unwrap();
    assert_eq!(rows[0].sentiment_score, 0.62);

    let rows = compute(&[RawRecord::new("Mar 26", 100, 100).with_block_trades(375)]).unwrap();
    assert_eq!(rows[0].sentiment_score, 0.38);
}
