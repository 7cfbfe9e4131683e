//! Roster ingestion.
//!
//! Turns the HR roster CSV into a validated [`Dataset`](crate::models::Dataset):
//! trims categorical strings, collapses department aliases, parses dates and
//! rejects rows that break the record contract. This runs once, before any
//! metrics are computed.

mod loader;
mod raw;

pub use loader::DatasetLoader;
pub use raw::{RawEmployeeRow, parse_date};
