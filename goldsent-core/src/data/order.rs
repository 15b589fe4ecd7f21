//! Record ordering before the pipeline runs.
//!
//! The pipeline trusts caller order. Sources that are not already oldest-first
//! can opt into a stable sort on the date label.

use serde::{Deserialize, Serialize};

use crate::domain::RawRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordOrder {
    /// Keep the order the source produced.
    #[default]
    AsIngested,
    /// Stable lexicographic sort on the opaque date label.
    ByDateLabel,
}

pub fn order_records(mut records: Vec<RawRecord>, order: RecordOrder) -> Vec<RawRecord> {
    if order == RecordOrder::ByDateLabel {
        log::debug!("sorting {} records by date label", records.len());
        records.sort_by(|a, b| a.date.cmp(&b.date));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(records: &[RawRecord]) -> Vec<&str> {
        records.iter().map(|r| r.date.as_str()).collect()
    }

    #[test]
    fn as_ingested_is_untouched() {
        let recs = vec![RawRecord::new("Mar 28", 1, 1), RawRecord::new("Mar 26", 1, 1)];
        let out = order_records(recs, RecordOrder::AsIngested);
        assert_eq!(dates(&out), ["Mar 28", "Mar 26"]);
    }

    #[test]
    fn by_label_is_stable() {
        let recs = vec![
            RawRecord::new("2024-03-28", 1, 1),
            RawRecord::new("2024-03-26", 1, 1),
            RawRecord::new("2024-03-27", 1, 1),
            RawRecord::new("2024-03-26", 2, 2),
        ];
        let out = order_records(recs, RecordOrder::ByDateLabel);
        assert_eq!(
            dates(&out),
            ["2024-03-26", "2024-03-26", "2024-03-27", "2024-03-28"]
        );
        assert_eq!(out[0].volume, Some(1));
        assert_eq!(out[1].volume, Some(2));
    }
}
