//! Data acquisition — sources that supply raw records to the metrics pipeline.

pub mod feed;
pub mod numeric;
pub mod order;
pub mod provider;
pub mod sample;
pub mod spreadsheet;

pub use feed::{FeedProvider, FeedSettings};
pub use order::{order_records, RecordOrder};
pub use provider::{DataError, DataProvider, DataSource, FetchResult};
pub use sample::SampleProvider;
pub use spreadsheet::SpreadsheetProvider;
