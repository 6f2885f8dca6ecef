//! Countdown text, urgency tiers and sort orders.
//!
//! This is the canonical implementation of what a dashboard card shows for a
//! record at a given instant. The page script mirrors it and receives the same
//! [`CountdownOptions`] through its embedded settings block.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use eventboard_core::{remaining_time, CountdownOptions, EventRecord, UrgencyClass};
//!
//! let record = EventRecord::new("Spring Cup").with_end_date("2025-06-01");
//! let now = NaiveDate::from_ymd_opt(2025, 5, 30).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! let countdown = remaining_time(record.ends_at(), now, &CountdownOptions::default());
//! assert_eq!(countdown.class, UrgencyClass::Critical);
//! assert_eq!(countdown.text, "2일 23시간 59분 남음");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::EventRecord;
use crate::time::millis_until;

pub const MILLIS_PER_MINUTE: i64 = 60 * 1000;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Badge class for a record at a given instant.
///
/// Declared from most to least urgent within each scheme, followed by the
/// two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyClass {
    /// Fewer than `critical_days` whole days left.
    Critical,
    /// Fewer than `warning_days` whole days left.
    Warning,
    /// Fewer than `notice_days` whole days left.
    Notice,
    /// Everything further out.
    Safe,
    /// Legacy two-tier scheme: fewer than `critical_days` left.
    Urgent,
    /// Legacy two-tier scheme: everything else still running.
    Active,
    /// The end timestamp has passed.
    Ended,
    /// No usable end date and the undated policy keeps it apart from ended.
    Undated,
}

impl UrgencyClass {
    /// Returns the CSS class name for this badge.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Safe => "safe",
            Self::Urgent => "urgent",
            Self::Active => "active",
            Self::Ended => "ended",
            Self::Undated => "undated",
        }
    }

    /// Returns true while the event is still running.
    pub fn is_upcoming(&self) -> bool {
        !matches!(self, Self::Ended | Self::Undated)
    }
}

impl fmt::Display for UrgencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which set of tiers an upcoming record is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyScheme {
    /// critical / warning / notice / safe.
    #[default]
    Tiered,
    /// urgent / active.
    ///
    /// Deprecated; kept so older pages can be regenerated unchanged.
    Legacy,
}

impl UrgencyScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiered => "tiered",
            Self::Legacy => "legacy",
        }
    }
}

/// Day cutoffs for the tiers, each exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub critical_days: i64,
    pub warning_days: i64,
    pub notice_days: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical_days: 3,
            warning_days: 7,
            notice_days: 30,
        }
    }
}

/// Invalid threshold configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("threshold `{name}` must be positive (got {value})")]
    NonPositive { name: &'static str, value: i64 },

    #[error(
        "thresholds must increase: critical ({critical}) < warning ({warning}) < notice ({notice})"
    )]
    NotIncreasing {
        critical: i64,
        warning: i64,
        notice: i64,
    },
}

impl Thresholds {
    /// Checks that every cutoff is positive and they strictly increase.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        for (name, value) in [
            ("critical_days", self.critical_days),
            ("warning_days", self.warning_days),
            ("notice_days", self.notice_days),
        ] {
            if value <= 0 {
                return Err(ThresholdError::NonPositive { name, value });
            }
        }

        if !(self.critical_days < self.warning_days && self.warning_days < self.notice_days) {
            return Err(ThresholdError::NotIncreasing {
                critical: self.critical_days,
                warning: self.warning_days,
                notice: self.notice_days,
            });
        }

        Ok(())
    }
}

/// How records without a usable end date are shown and sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndatedPolicy {
    /// Same badge and sort position as ended records.
    #[default]
    Ended,
    /// A separate `undated` badge, sorted after ended records.
    Distinct,
}

impl UndatedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ended => "ended",
            Self::Distinct => "distinct",
        }
    }
}

/// Badge texts for the terminal states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeLabels {
    pub ended: String,
    pub undated: String,
}

impl Default for BadgeLabels {
    fn default() -> Self {
        Self {
            ended: "종료됨".to_string(),
            undated: "마감일 미정".to_string(),
        }
    }
}

/// Everything that decides a badge besides the record and the instant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownOptions {
    pub scheme: UrgencyScheme,
    pub thresholds: Thresholds,
    pub undated: UndatedPolicy,
    pub labels: BadgeLabels,
}

impl CountdownOptions {
    /// Classifies a still-running record by its whole remaining days.
    pub fn classify(&self, days: i64) -> UrgencyClass {
        let t = &self.thresholds;
        match self.scheme {
            UrgencyScheme::Tiered => {
                if days < t.critical_days {
                    UrgencyClass::Critical
                } else if days < t.warning_days {
                    UrgencyClass::Warning
                } else if days < t.notice_days {
                    UrgencyClass::Notice
                } else {
                    UrgencyClass::Safe
                }
            }
            UrgencyScheme::Legacy => {
                if days < t.critical_days {
                    UrgencyClass::Urgent
                } else {
                    UrgencyClass::Active
                }
            }
        }
    }

    fn undated_badge(&self) -> (UrgencyClass, &str) {
        match self.undated {
            UndatedPolicy::Ended => (UrgencyClass::Ended, self.labels.ended.as_str()),
            UndatedPolicy::Distinct => (UrgencyClass::Undated, self.labels.undated.as_str()),
        }
    }
}

/// Remaining time split on day, hour and minute boundaries (floored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Remaining {
    /// Splits a non-negative millisecond count; `None` for negative input.
    pub fn from_millis(millis: i64) -> Option<Self> {
        if millis < 0 {
            return None;
        }
        Some(Self {
            days: millis / MILLIS_PER_DAY,
            hours: (millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
        })
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}일 ", self.days)?;
        }
        write!(f, "{}시간 {}분 남음", self.hours, self.minutes)
    }
}

/// Derived badge state for one record at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    /// Milliseconds until the end, negative once passed, `None` when undated.
    pub remaining_millis: Option<i64>,
    pub class: UrgencyClass,
    pub text: String,
}

/// Computes the badge for an end timestamp at `now`.
pub fn remaining_time(
    end: Option<NaiveDateTime>,
    now: NaiveDateTime,
    options: &CountdownOptions,
) -> Countdown {
    let Some(end) = end else {
        let (class, text) = options.undated_badge();
        return Countdown {
            remaining_millis: None,
            class,
            text: text.to_string(),
        };
    };

    let diff = millis_until(&end, &now);
    match Remaining::from_millis(diff) {
        Some(remaining) => Countdown {
            remaining_millis: Some(diff),
            class: options.classify(remaining.days),
            text: remaining.to_string(),
        },
        None => Countdown {
            remaining_millis: Some(diff),
            class: UrgencyClass::Ended,
            text: options.labels.ended.clone(),
        },
    }
}

/// Card order on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Least remaining time first; ended and undated records last.
    #[default]
    EndingSoon,
    /// Earliest start date first; unparseable starts last.
    StartDate,
    /// Title, case-insensitive.
    Title,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [Self::EndingSoon, Self::StartDate, Self::Title];

    /// Returns the identifier used by the page's sort selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndingSoon => "endingSoon",
            Self::StartDate => "startDate",
            Self::Title => "title",
        }
    }

    /// Returns the selector label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EndingSoon => "마감 임박순 (기본)",
            Self::StartDate => "시작일 순",
            Self::Title => "제목 순",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "endingSoon" | "ending-soon" | "ending_soon" => Ok(Self::EndingSoon),
            "startDate" | "start-date" | "start_date" => Ok(Self::StartDate),
            "title" => Ok(Self::Title),
            other => Err(format!(
                "unknown sort order `{}` (expected endingSoon, startDate or title)",
                other
            )),
        }
    }
}

/// Returns the records in the requested order without touching the input.
///
/// The sort is stable: records that compare equal keep their source order.
pub fn sort_events<'a>(
    records: &'a [EventRecord],
    order: SortOrder,
    now: NaiveDateTime,
    undated: UndatedPolicy,
) -> Vec<&'a EventRecord> {
    let mut sorted: Vec<&EventRecord> = records.iter().collect();
    match order {
        SortOrder::EndingSoon => {
            sorted.sort_by_key(|r| ending_rank(r, now, undated));
        }
        SortOrder::StartDate => {
            sorted.sort_by_key(|r| (r.starts_at().is_none(), r.starts_at()));
        }
        SortOrder::Title => {
            sorted.sort_by(|a, b| compare_titles(a.title(), b.title()));
        }
    }
    sorted
}

/// Sort key for [`SortOrder::EndingSoon`]: running records by remaining time,
/// then ended ones, then (with [`UndatedPolicy::Distinct`]) undated ones.
fn ending_rank(record: &EventRecord, now: NaiveDateTime, undated: UndatedPolicy) -> (u8, i64) {
    match record.ends_at() {
        Some(end) => {
            let diff = millis_until(&end, &now);
            if diff < 0 { (1, 0) } else { (0, diff) }
        }
        None => match undated {
            UndatedPolicy::Ended => (1, 0),
            UndatedPolicy::Distinct => (2, 0),
        },
    }
}

/// Case-insensitive title comparison.
///
/// Precomposed Hangul syllables are laid out in dictionary order in Unicode,
/// so code point order matches the Korean collation the page uses for them.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// A record together with its badge, as one card shows it.
#[derive(Debug, Clone)]
pub struct EventView<'a> {
    pub record: &'a EventRecord,
    pub countdown: Countdown,
}

/// Builds the sorted card views for one render tick.
pub fn views_at<'a>(
    records: &'a [EventRecord],
    order: SortOrder,
    now: NaiveDateTime,
    options: &CountdownOptions,
) -> Vec<EventView<'a>> {
    sort_events(records, order, now, options.undated)
        .into_iter()
        .map(|record| EventView {
            record,
            countdown: remaining_time(record.ends_at(), now, options),
        })
        .collect()
}

/// Counts views per badge class, in class order.
pub fn tier_counts(views: &[EventView<'_>]) -> Vec<(UrgencyClass, usize)> {
    let mut counts: Vec<(UrgencyClass, usize)> = Vec::new();
    for view in views {
        match counts.iter_mut().find(|(class, _)| *class == view.countdown.class) {
            Some((_, n)) => *n += 1,
            None => counts.push((view.countdown.class, 1)),
        }
    }
    counts.sort_by_key(|(class, _)| *class);
    counts
}

/// Formats views as plain lines, one per card.
pub fn format_lines(views: &[EventView<'_>]) -> Vec<String> {
    views
        .iter()
        .map(|v| {
            format!(
                "[{}] {} - {}",
                v.countdown.class, v.countdown.text, v.record.title()
            )
        })
        .collect()
}
