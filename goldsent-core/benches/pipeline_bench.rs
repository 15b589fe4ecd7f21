//! Criterion benchmarks for the metrics pipeline.
//!
//! Benchmarks:
//! 1. `compute` over batches of increasing size
//! 2. Spreadsheet parsing of a generated exchange report

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use goldsent_core::compute;
use goldsent_core::data::SpreadsheetProvider;
use goldsent_core::RawRecord;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_records(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| {
            let wave = (i as f64 * 0.1).sin();
            RawRecord::new(
                format!("day-{i:06}"),
                (240_000.0 + wave * 20_000.0) as u64,
                (500_000.0 + wave * 60_000.0) as u64,
            )
            .with_price(2200.0 + wave * 30.0)
            .with_deliveries((i % 500) as u64)
            .with_block_trades((i % 3000) as u64)
        })
        .collect()
}

fn make_report(n: usize) -> String {
    let mut out = String::from("Report,,,\nFutures,Price,Total Volume,At Close\n");
    for (i, rec) in make_records(n).iter().enumerate() {
        out.push_str(&format!(
            "day-{i:06},{:.1},\"{}\",\"{}\"\n",
            rec.price.unwrap_or_default(),
            rec.volume.unwrap_or_default(),
            rec.open_interest.unwrap_or_default()
        ));
    }
    out
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for n in [100usize, 10_000, 250_000] {
        let records = make_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, recs| {
            b.iter(|| compute(black_box(recs)).unwrap())
        });
    }
    group.finish();
}

fn bench_spreadsheet(c: &mut Criterion) {
    let report = make_report(10_000);
    c.bench_function("spreadsheet_parse_10k", |b| {
        b.iter(|| SpreadsheetProvider::parse(black_box(report.as_bytes()), "bench").unwrap())
    });
}

criterion_group!(benches, bench_compute, bench_spreadsheet);
criterion_main!(benches);
