//! Record sources and the normalization pipeline.
//!
//! - [`RecordSource`] - the trait every table format implements
//! - [`CsvSource`] - reads a CSV export from disk
//! - [`RawRow`] - one row as text, before date parsing
//! - [`load_events`] - reads a source and normalizes it into an [`EventList`]
//! - [`SourceError`] - missing and unreadable inputs
//!
//! ```text
//! ┌──────────────┐
//! │  events.csv  │
//! └──────┬───────┘
//!        │ CsvSource (RecordSource)
//!        ▼
//! ┌──────────────┐
//! │  Vec<RawRow> │
//! └──────┬───────┘
//!        │ normalize_rows()
//!        ▼
//! ┌──────────────┐
//! │  EventList   │
//! └──────────────┘
//! ```
//!
//! [`EventList`]: eventboard_core::EventList

pub mod columns;
pub mod csv_source;
pub mod error;
pub mod normalize;
pub mod raw_row;
pub mod source;

pub use columns::ColumnNames;
pub use csv_source::{read_rows, CsvSource};
pub use error::{SourceError, SourceErrorCode, SourceResult};
pub use normalize::{load_events, normalize_row, normalize_rows};
pub use raw_row::RawRow;
pub use source::{ErrorSource, MemorySource, RecordSource};
