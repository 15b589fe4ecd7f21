//! Spreadsheet upload provider (CSV export of an exchange volume/OI report).
//!
//! Exchange exports start with title and note rows before the real header, and
//! use report column names ("Futures", "Total Volume", "At Close"). The reader
//! skips ahead to the header row, maps known column names onto record fields,
//! and drops data rows that lack a date, volume or open interest.

use std::io::Read;
use std::path::PathBuf;

use super::numeric::{parse_count, parse_price, parse_signed};
use super::provider::{DataError, DataProvider, DataSource, FetchResult};
use crate::domain::RawRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Date,
    Price,
    Volume,
    OpenInterest,
    OiChange,
    Deliveries,
    BlockTrades,
}

impl Column {
    fn from_header(cell: &str) -> Option<Self> {
        match cell.trim().to_ascii_lowercase().as_str() {
            "futures" | "date" => Some(Column::Date),
            "price" | "settle" | "last" => Some(Column::Price),
            "total volume" | "volume" => Some(Column::Volume),
            "at close" | "open interest" => Some(Column::OpenInterest),
            "change" | "oi change" => Some(Column::OiChange),
            "deliveries" => Some(Column::Deliveries),
            "block trades" | "block trade" => Some(Column::BlockTrades),
            _ => None,
        }
    }
}

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct ColumnMap {
    date: Option<usize>,
    price: Option<usize>,
    volume: Option<usize>,
    open_interest: Option<usize>,
    oi_change: Option<usize>,
    deliveries: Option<usize>,
    block_trades: Option<usize>,
}

impl ColumnMap {
    fn from_header(record: &csv::StringRecord) -> Self {
        let mut map = ColumnMap::default();
        for (idx, cell) in record.iter().enumerate() {
            let slot = match Column::from_header(cell) {
                Some(Column::Date) => &mut map.date,
                Some(Column::Price) => &mut map.price,
                Some(Column::Volume) => &mut map.volume,
                Some(Column::OpenInterest) => &mut map.open_interest,
                Some(Column::OiChange) => &mut map.oi_change,
                Some(Column::Deliveries) => &mut map.deliveries,
                Some(Column::BlockTrades) => &mut map.block_trades,
                None => continue,
            };
            // First occurrence wins when a report repeats a column name.
            slot.get_or_insert(idx);
        }
        map
    }

    fn is_header(record: &csv::StringRecord) -> bool {
        record
            .iter()
            .any(|cell| Column::from_header(cell) == Some(Column::Date))
    }
}

fn cell<'a>(record: &'a csv::StringRecord, idx: Option<usize>) -> Option<&'a str> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Reads records from a CSV file on disk.
pub struct SpreadsheetProvider {
    path: PathBuf,
}

impl SpreadsheetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse a spreadsheet export from any reader. `origin` names the source in errors.
    pub fn parse<R: Read>(reader: R, origin: &str) -> Result<Vec<RawRecord>, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut columns: Option<ColumnMap> = None;
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (line, row) in csv_reader.records().enumerate() {
            let row = row.map_err(|e| DataError::SpreadsheetFormat(format!("{origin}: {e}")))?;

            if columns.is_none() {
                if ColumnMap::is_header(&row) {
                    let map = ColumnMap::from_header(&row);
                    if map.volume.is_none() || map.open_interest.is_none() {
                        return Err(DataError::SpreadsheetFormat(format!(
                            "{origin}: header row {} has no volume or open interest column",
                            line + 1
                        )));
                    }
                    log::debug!("{origin}: header found on row {}", line + 1);
                    columns = Some(map);
                } else {
                    log::debug!("{origin}: skipping preamble row {}", line + 1);
                }
                continue;
            }
            let Some(map) = columns.as_ref() else {
                continue;
            };

            let date = cell(&row, map.date);
            let volume = cell(&row, map.volume).and_then(parse_count);
            let open_interest = cell(&row, map.open_interest).and_then(parse_count);

            let (Some(date), Some(volume), Some(open_interest)) = (date, volume, open_interest)
            else {
                dropped += 1;
                log::debug!("{origin}: dropping incomplete row {}", line + 1);
                continue;
            };

            records.push(RawRecord {
                date: date.to_string(),
                price: cell(&row, map.price).and_then(parse_price),
                volume: Some(volume),
                open_interest: Some(open_interest),
                oi_change: cell(&row, map.oi_change).and_then(parse_signed),
                deliveries: cell(&row, map.deliveries).and_then(parse_count),
                block_trades: cell(&row, map.block_trades).and_then(parse_count),
            });
        }

        if columns.is_none() {
            return Err(DataError::SpreadsheetFormat(format!(
                "{origin}: no header row naming a Futures/Date column"
            )));
        }
        if records.is_empty() {
            return Err(DataError::NoRecords(origin.to_string()));
        }
        if dropped > 0 {
            log::info!("{origin}: kept {} rows, dropped {dropped}", records.len());
        }
        Ok(records)
    }
}

impl DataProvider for SpreadsheetProvider {
    fn name(&self) -> &str {
        "spreadsheet"
    }

    fn fetch(&self) -> Result<FetchResult, DataError> {
        let file = std::fs::File::open(&self.path)?;
        let records = Self::parse(file, &self.path.display().to_string())?;
        Ok(FetchResult {
            records,
            source: DataSource::Spreadsheet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
Gold Futures Volume and Open Interest,,,,,,
Report date: 03/28,,,,,,
Futures,Price,Total Volume,At Close,Change,Deliveries,Block Trades
Mar 26,2188.4,\"239,000\",\"467,637\",\"17,500\",88,\"1,967\"
Mar 27,2204.7,\"248,000\",\"512,637\",\"45,000\",123,\"2,453\"
Totals,,,,,,
";

    #[test]
    fn skips_preamble_and_renames_columns() {
        let recs = SpreadsheetProvider::parse(REPORT.as_bytes(), "report.csv").unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].date, "Mar 26");
        assert_eq!(recs[0].price, Some(2188.4));
        assert_eq!(recs[0].volume, Some(239_000));
        assert_eq!(recs[0].open_interest, Some(467_637));
        assert_eq!(recs[0].oi_change, Some(17_500));
        assert_eq!(recs[1].block_trades, Some(2453));
    }

    #[test]
    fn plain_header_with_missing_optional_columns() {
        let csv = "Date,Volume,Open Interest\nd1,10,20\nd2,11,\nd3,12,22\n";
        let recs = SpreadsheetProvider::parse(csv.as_bytes(), "plain.csv").unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].date, "d3");
        assert_eq!(recs[1].price, None);
        assert_eq!(recs[1].deliveries, None);
    }

    #[test]
    fn missing_header_is_format_error() {
        let err = SpreadsheetProvider::parse("a,b\n1,2\n".as_bytes(), "x.csv").unwrap_err();
        assert!(matches!(err, DataError::SpreadsheetFormat(_)));
    }

    #[test]
    fn header_without_open_interest_is_format_error() {
        let err =
            SpreadsheetProvider::parse("Futures,Total Volume\nd1,5\n".as_bytes(), "x.csv")
                .unwrap_err();
        assert!(matches!(err, DataError::SpreadsheetFormat(msg) if msg.contains("open interest")));
    }

    #[test]
    fn all_rows_dropped_is_no_records() {
        let err = SpreadsheetProvider::parse(
            "Futures,Total Volume,At Close\n,1,2\nd2,,2\n".as_bytes(),
            "empty.csv",
        )
        .unwrap_err();
        assert!(matches!(err, DataError::NoRecords(_)));
    }
}
