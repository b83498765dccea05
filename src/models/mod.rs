//! Core data model for arXiv records.

mod record;

pub use record::{parse_calendar_date, Record, RecordBuilder};
