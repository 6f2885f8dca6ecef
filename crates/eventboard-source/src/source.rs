//! RecordSource trait definition.
//!
//! A source turns some tabular input into [`RawRow`]s. Everything after that
//! (date normalization, logging of bad cells) is shared and lives in
//! [`crate::normalize`].

use crate::error::{SourceError, SourceResult};
use crate::raw_row::RawRow;

/// The seam between table formats and the normalization pipeline.
///
/// Implementations read their input once per call and return rows in source
/// order. They must not skip or reorder rows; filtering happens downstream.
pub trait RecordSource {
    /// Returns the kind of source (e.g. "csv").
    fn name(&self) -> &str;

    /// Describes where rows come from, for messages (e.g. a file path).
    fn location(&self) -> String;

    /// Reads every data row.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the input is missing or unreadable.
    fn fetch_rows(&self) -> SourceResult<Vec<RawRow>>;
}

/// A source that serves rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<RawRow>,
}

impl MemorySource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

impl RecordSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn location(&self) -> String {
        format!("<{} in-memory rows>", self.rows.len())
    }

    fn fetch_rows(&self) -> SourceResult<Vec<RawRow>> {
        Ok(self.rows.clone())
    }
}

/// A source that always fails with the same error.
#[derive(Debug)]
pub struct ErrorSource {
    name: String,
    error: SourceError,
}

impl ErrorSource {
    pub fn new(name: impl Into<String>, error: SourceError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }
}

impl RecordSource for ErrorSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> String {
        format!("<{}>", self.name)
    }

    fn fetch_rows(&self) -> SourceResult<Vec<RawRow>> {
        Err(SourceError::new(self.error.code(), self.error.message()).with_source_name(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceErrorCode;

    #[test]
    fn memory_source_returns_rows_in_order() {
        let source = MemorySource::new(vec![RawRow::new(2, "b"), RawRow::new(3, "a")]);
        assert_eq!(source.name(), "memory");
        assert_eq!(source.location(), "<2 in-memory rows>");

        let rows = source.fetch_rows().unwrap();
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn error_source_fails() {
        let source = ErrorSource::new("broken", SourceError::missing("gone"));
        let err = source.fetch_rows().unwrap_err();
        assert_eq!(err.code(), SourceErrorCode::Missing);
        assert_eq!(err.source_name(), Some("broken"));
        assert_eq!(err.message(), "gone");
    }
}
