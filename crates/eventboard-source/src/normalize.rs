//! RawRow to EventRecord conversion pipeline.
//!
//! Normalization never fails. A row whose end date cannot be parsed is kept
//! with no end timestamp (it shows as ended/undated) and a warning naming the
//! row is logged. Rows with every cell blank are dropped.

use eventboard_core::{EventList, EventRecord};
use tracing::{debug, info, warn};

use crate::error::SourceResult;
use crate::raw_row::RawRow;
use crate::source::RecordSource;

/// Converts a [`RawRow`] to an [`EventRecord`].
pub fn normalize_row(raw: &RawRow) -> EventRecord {
    let record = raw
        .extra
        .iter()
        .fold(EventRecord::new(&raw.title), |record, (column, value)| {
            record.with_extra(column, value)
        })
        .with_organizer(&raw.organizer_name, &raw.organizer_id)
        .with_start_date(&raw.start_date)
        .with_end_date(&raw.end_date)
        .with_link(&raw.link);

    if record.has_unparseable_end() {
        warn!(
            row = raw.line,
            title = %raw.title,
            raw = %raw.end_date,
            "Unparseable end date, treating event as ended"
        );
    }

    record
}

/// Converts rows in order, skipping blank ones.
pub fn normalize_rows(rows: &[RawRow]) -> EventList {
    rows.iter()
        .filter(|row| {
            let blank = row.is_blank();
            if blank {
                debug!(row = row.line, "Skipping blank row");
            }
            !blank
        })
        .map(normalize_row)
        .collect()
}

/// Reads a source and normalizes every row.
///
/// # Errors
///
/// Propagates the source's error; per-row problems are only logged.
pub fn load_events(source: &dyn RecordSource) -> SourceResult<EventList> {
    let rows = source.fetch_rows()?;
    let events = normalize_rows(&rows);

    info!(
        source = source.name(),
        location = %source.location(),
        rows = rows.len(),
        events = events.len(),
        undated = events.undated_count(),
        "Loaded events"
    );

    Ok(events)
}
