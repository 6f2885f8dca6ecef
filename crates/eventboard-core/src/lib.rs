//! Core types: records, date normalization, countdowns, sort orders

pub mod countdown;
pub mod event;
pub mod time;
pub mod tracing;

pub use countdown::{
    format_lines, remaining_time, sort_events, tier_counts, views_at, BadgeLabels, Countdown,
    CountdownOptions, EventView, Remaining, SortOrder, ThresholdError, Thresholds, UndatedPolicy,
    UrgencyClass, UrgencyScheme,
};
pub use event::{EventList, EventRecord};
pub use time::{format_iso, millis_until, normalize_end, parse_timestamp, ISO_FORMAT};
pub use tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
