//! Source-agnostic raw rows.
//!
//! A [`RawRow`] is one table row as text, before any date parsing. Sources
//! produce them; [`crate::normalize`] turns them into
//! [`EventRecord`](eventboard_core::EventRecord)s.

/// One row of the source table, cells as written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRow {
    /// 1-based line number in the source, used in log messages.
    pub line: u64,
    pub title: String,
    pub organizer_name: String,
    pub organizer_id: String,
    pub start_date: String,
    pub end_date: String,
    pub link: String,
    /// Non-required columns as `(header, value)`, in header order.
    pub extra: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(line: u64, title: impl Into<String>) -> Self {
        Self {
            line,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_organizer(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.organizer_name = name.into();
        self.organizer_id = id.into();
        self
    }

    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((column.into(), value.into()));
        self
    }

    /// Returns true if every cell, extras included, is blank.
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.organizer_name,
            &self.organizer_id,
            &self.start_date,
            &self.end_date,
            &self.link,
        ]
        .iter()
        .all(|cell| cell.trim().is_empty())
            && self.extra.iter().all(|(_, v)| v.trim().is_empty())
    }
}
