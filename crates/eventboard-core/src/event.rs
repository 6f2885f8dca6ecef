//! Event records.
//!
//! - [`EventRecord`]: one row of the source table with its normalized end
//! - [`EventList`]: the read-only, ordered list every renderer works from

use std::collections::BTreeMap;
use std::ops::Index;

use chrono::NaiveDateTime;

use crate::time::{normalize_end, parse_timestamp};

/// One event or competition entry.
///
/// Raw strings are kept exactly as they appeared in the source so they can
/// be displayed and embedded verbatim. The normalized timestamps are derived
/// once, when the corresponding raw value is set, and cannot be changed
/// independently afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventRecord {
    title: String,
    organizer_name: String,
    organizer_id: String,
    start_date: String,
    end_date: String,
    link: String,
    extra: BTreeMap<String, String>,
    starts_at: Option<NaiveDateTime>,
    ends_at: Option<NaiveDateTime>,
}

impl EventRecord {
    /// Creates a record with the given title and every other field empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the organizer nickname and identifier.
    pub fn with_organizer(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.organizer_name = name.into();
        self.organizer_id = id.into();
        self
    }

    /// Builder method to set the raw start date.
    pub fn with_start_date(mut self, raw: impl Into<String>) -> Self {
        self.start_date = raw.into();
        self.starts_at = parse_timestamp(&self.start_date);
        self
    }

    /// Builder method to set the raw end date; normalizes it on the spot.
    pub fn with_end_date(mut self, raw: impl Into<String>) -> Self {
        self.end_date = raw.into();
        self.ends_at = normalize_end(&self.end_date);
        self
    }

    /// Builder method to set the outbound link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Builder method to carry an additional source column.
    pub fn with_extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(column.into(), value.into());
        self
    }

    /// The event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The organizer's display name.
    pub fn organizer_name(&self) -> &str {
        &self.organizer_name
    }

    /// The organizer's identifying code.
    pub fn organizer_id(&self) -> &str {
        &self.organizer_id
    }

    /// The start date as written in the source.
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// The end date as written in the source (possibly empty).
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// The outbound link, used verbatim.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Source columns outside the required set, keyed by header name.
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// The parsed start date, if it uses an accepted layout.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.starts_at
    }

    /// The moment the event is over, after end-of-day inference.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.ends_at
    }

    /// Returns true when a non-empty end date could not be parsed.
    pub fn has_unparseable_end(&self) -> bool {
        self.ends_at.is_none() && !self.end_date.trim().is_empty()
    }
}

/// The ordered list of records loaded for one run.
///
/// There is no way to mutate a list once built; every view (countdowns,
/// sort orders) is derived fresh from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    records: Vec<EventRecord>,
}

impl EventList {
    /// Wraps records in source order.
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records were loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    /// The records as a slice, for sorting and views.
    pub fn as_slice(&self) -> &[EventRecord] {
        &self.records
    }

    /// Number of records whose end date is missing or unparseable.
    pub fn undated_count(&self) -> usize {
        self.records.iter().filter(|r| r.ends_at().is_none()).count()
    }
}

impl From<Vec<EventRecord>> for EventList {
    fn from(records: Vec<EventRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<EventRecord> for EventList {
    fn from_iter<I: IntoIterator<Item = EventRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Index<usize> for EventList {
    type Output = EventRecord;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.records[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    mod record {
        use super::*;

        #[test]
        fn builder_keeps_raw_values() {
            let record = EventRecord::new("Spring Cup")
                .with_organizer("bangbung", "a1b2")
                .with_start_date("2025-05-01")
                .with_end_date("2025-06-01")
                .with_link("http://x");

            assert_eq!(record.title(), "Spring Cup");
            assert_eq!(record.organizer_name(), "bangbung");
            assert_eq!(record.organizer_id(), "a1b2");
            assert_eq!(record.start_date(), "2025-05-01");
            assert_eq!(record.end_date(), "2025-06-01");
            assert_eq!(record.link(), "http://x");
        }

        #[test]
        fn end_date_normalized_on_set() {
            let record = EventRecord::new("Spring Cup").with_end_date("2025-06-01");
            assert_eq!(record.ends_at(), Some(dt(2025, 6, 1, 23, 59, 59)));
            assert!(!record.has_unparseable_end());
        }

        #[test]
        fn start_date_parsed_without_end_of_day() {
            let record = EventRecord::new("Spring Cup").with_start_date("2025-05-01");
            assert_eq!(record.starts_at(), Some(dt(2025, 5, 1, 0, 0, 0)));
        }

        #[test]
        fn empty_end_is_undated_not_unparseable() {
            let record = EventRecord::new("No deadline").with_end_date("   ");
            assert_eq!(record.ends_at(), None);
            assert!(!record.has_unparseable_end());
        }

        #[test]
        fn garbage_end_is_flagged() {
            let record = EventRecord::new("Broken").with_end_date("next friday");
            assert_eq!(record.ends_at(), None);
            assert!(record.has_unparseable_end());
            assert_eq!(record.end_date(), "next friday");
        }

        #[test]
        fn extra_columns_are_kept() {
            let record = EventRecord::new("Cup")
                .with_extra("비고", "온라인")
                .with_extra("상금", "10000");
            assert_eq!(record.extra().len(), 2);
            assert_eq!(record.extra().get("비고").map(String::as_str), Some("온라인"));
        }
    }

    mod list {
        use super::*;

        #[test]
        fn preserves_order() {
            let list: EventList = ["b", "a", "c"].into_iter().map(EventRecord::new).collect();
            let titles: Vec<_> = list.iter().map(EventRecord::title).collect();
            assert_eq!(titles, vec!["b", "a", "c"]);
            assert_eq!(list[1].title(), "a");
            assert_eq!(list.len(), 3);
            assert!(!list.is_empty());
        }

        #[test]
        fn counts_undated() {
            let list = EventList::new(vec![
                EventRecord::new("a").with_end_date("2025-06-01"),
                EventRecord::new("b"),
                EventRecord::new("c").with_end_date("??"),
            ]);
            assert_eq!(list.undated_count(), 2);
        }
    }
}
