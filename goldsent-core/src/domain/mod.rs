//! Domain types: raw per-day records, derived rows, and the signal enum.

pub mod record;
pub mod row;
pub mod signal;

pub use record::RawRecord;
pub use row::DerivedRow;
pub use signal::Signal;
