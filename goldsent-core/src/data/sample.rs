//! Built-in gold futures sample (three consecutive trading days).

use super::provider::{DataError, DataProvider, DataSource, FetchResult};
use crate::domain::RawRecord;

pub struct SampleProvider;

impl SampleProvider {
    pub fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new("Mar 26", 239_000, 467_637)
                .with_price(2188.4)
                .with_oi_change(17_500)
                .with_deliveries(88)
                .with_block_trades(1967),
            RawRecord::new("Mar 27", 248_000, 512_637)
                .with_price(2204.7)
                .with_oi_change(45_000)
                .with_deliveries(123)
                .with_block_trades(2453),
            RawRecord::new("Mar 28", 250_631, 574_824)
                .with_price(2221.3)
                .with_oi_change(62_187)
                .with_deliveries(521)
                .with_block_trades(3071),
        ]
    }
}

impl DataProvider for SampleProvider {
    fn name(&self) -> &str {
        "sample"
    }

    fn fetch(&self) -> Result<FetchResult, DataError> {
        Ok(FetchResult {
            records: Self::records(),
            source: DataSource::Sample,
        })
    }
}
