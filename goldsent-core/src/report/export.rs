//! Derived-row export (CSV/JSON).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ReportError;
use crate::domain::DerivedRow;
use crate::pipeline::Analysis;

pub const CSV_HEADER: [&str; 12] = [
    "date",
    "price",
    "volume",
    "open_interest",
    "oi_change",
    "deliveries",
    "block_trades",
    "pct_oi_change",
    "pct_volume_change",
    "signal",
    "sentiment_score",
    "commentary",
];

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn write_csv<W: Write>(writer: W, rows: &[DerivedRow]) -> Result<(), ReportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADER)?;

    for row in rows {
        out.write_record([
            row.date.clone(),
            opt(row.price),
            row.volume.to_string(),
            row.open_interest.to_string(),
            opt(row.oi_change),
            opt(row.deliveries),
            opt(row.block_trades),
            format!("{:.2}", row.pct_oi_change),
            format!("{:.2}", row.pct_volume_change),
            row.signal.label().to_string(),
            format!("{:.2}", row.sentiment_score),
            row.commentary.clone(),
        ])?;
    }

    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: W, analysis: &Analysis) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, analysis)?;
    Ok(())
}

pub fn write_csv_file(path: &Path, rows: &[DerivedRow]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), rows)
}

pub fn write_json_file(path: &Path, analysis: &Analysis) -> Result<(), ReportError> {
    let mut file = BufWriter::new(File::create(path)?);
    write_json(&mut file, analysis)?;
    file.flush()?;
    Ok(())
}
