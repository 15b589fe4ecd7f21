//! Property tests for pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. Length and order preservation
//! 2. First row has zero percentage changes
//! 3. Sentiment stays in [-1, 1] with two decimals
//! 4. Signal classification is strict and total
//! 5. Zero baselines never produce NaN/inf

use goldsent_core::metrics::classify;
use goldsent_core::{compute, RawRecord, Signal};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_record() -> impl Strategy<Value = RawRecord> {
    (
        0u64..2_000_000,
        0u64..2_000_000,
        proptest::option::of(0u64..20_000_000),
        proptest::option::of(0u64..20_000_000),
        proptest::option::of(1000.0..3000.0_f64),
    )
        .prop_map(|(volume, oi, deliveries, blocks, price)| RawRecord {
            date: String::new(),
            price,
            volume: Some(volume),
            open_interest: Some(oi),
            oi_change: None,
            deliveries,
            block_trades: blocks,
        })
}

fn arb_batch() -> impl Strategy<Value = Vec<RawRecord>> {
    prop::collection::vec(arb_record(), 1..40).prop_map(|mut recs| {
        for (i, r) in recs.iter_mut().enumerate() {
            r.date = format!("day-{i:03}");
        }
        recs
    })
}

fn is_two_decimals(x: f64) -> bool {
    ((x * 100.0).round() / 100.0 - x).abs() < 1e-12
}

// ── Batch invariants ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn output_preserves_length_and_order(batch in arb_batch()) {
        let rows = compute(&batch).unwrap();
        prop_assert_eq!(rows.len(), batch.len());
        for (row, rec) in rows.iter().zip(&batch) {
            prop_assert_eq!(&row.date, &rec.date);
            prop_assert_eq!(Some(row.volume), rec.volume);
            prop_assert_eq!(Some(row.open_interest), rec.open_interest);
        }
    }

    #[test]
    fn first_row_is_zero(batch in arb_batch()) {
        let rows = compute(&batch).unwrap();
        prop_assert_eq!(rows[0].pct_oi_change, 0.0);
        prop_assert_eq!(rows[0].pct_volume_change, 0.0);
    }

    #[test]
    fn sentiment_bounded_and_rounded(batch in arb_batch()) {
        for row in compute(&batch).unwrap() {
            prop_assert!(row.sentiment_score >= -1.0 && row.sentiment_score <= 1.0);
            prop_assert!(is_two_decimals(row.sentiment_score), "{}", row.sentiment_score);
        }
    }

    #[test]
    fn all_fields_finite(batch in arb_batch()) {
        for row in compute(&batch).unwrap() {
            prop_assert!(row.pct_oi_change.is_finite());
            prop_assert!(row.pct_volume_change.is_finite());
            prop_assert!(row.sentiment_score.is_finite());
        }
    }

    #[test]
    fn commentary_mentions_date(batch in arb_batch()) {
        for row in compute(&batch).unwrap() {
            prop_assert!(row.commentary.contains(&row.date));
        }
    }
}

// ── Classification ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn classification_matches_rules(oi in -100.0..100.0_f64, vol in -100.0..100.0_f64) {
        let expected = if oi > 5.0 && vol > 2.0 {
            Signal::BullishSpike
        } else if oi < -3.0 {
            Signal::OiDrop
        } else {
            Signal::Stable
        };
        prop_assert_eq!(classify(oi, vol), expected);
    }

    #[test]
    fn oi_at_spike_boundary_never_spikes(vol in -100.0..100.0_f64) {
        prop_assert_ne!(classify(5.0, vol), Signal::BullishSpike);
    }
}
