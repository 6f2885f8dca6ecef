//! Page settings and the settings block handed to the page script.

use std::time::Duration;

use eventboard_core::{CountdownOptions, SortOrder};
use serde::Serialize;

use crate::embed::embed_json;
use crate::error::RenderResult;

pub const DEFAULT_TITLE: &str = "방갤 갤 대회 목록 대시보드";
pub const DEFAULT_FOOTER: &str = "made by Bangbung Kim";
pub const DEFAULT_LOCALE: &str = "ko-KR";

/// Everything about the page that does not come from the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Document title and heading.
    pub title: String,
    /// Footer text; `None` hides it.
    pub footer: Option<String>,
    /// BCP 47 locale for the clock and title sorting.
    pub locale: String,
    /// Sort order selected when the page loads.
    pub default_sort: SortOrder,
    pub countdown: CountdownOptions,
    /// How often the clock ticks.
    pub clock_interval: Duration,
    /// How often countdowns, sort and cards are rebuilt.
    pub refresh_interval: Duration,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            footer: Some(DEFAULT_FOOTER.to_string()),
            locale: DEFAULT_LOCALE.to_string(),
            default_sort: SortOrder::default(),
            countdown: CountdownOptions::default(),
            clock_interval: Duration::from_secs(1),
            refresh_interval: Duration::from_secs(60),
        }
    }
}

impl PageSettings {
    /// The primary language subtag, for `<html lang>`.
    pub fn lang(&self) -> &str {
        self.locale
            .split(|c: char| c == '-' || c == '_')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("ko")
    }

    /// Builds the JSON settings block read by the page script.
    pub fn script_json(&self) -> RenderResult<String> {
        let countdown = &self.countdown;
        let block = ScriptSettings {
            locale: &self.locale,
            default_sort: self.default_sort,
            scheme: countdown.scheme.as_str(),
            thresholds: ScriptThresholds {
                critical: countdown.thresholds.critical_days,
                warning: countdown.thresholds.warning_days,
                notice: countdown.thresholds.notice_days,
            },
            undated: countdown.undated.as_str(),
            labels: ScriptLabels {
                ended: &countdown.labels.ended,
                undated: &countdown.labels.undated,
            },
            clock_interval_ms: millis(self.clock_interval),
            refresh_interval_ms: millis(self.refresh_interval),
        };
        embed_json(&block)
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptSettings<'a> {
    locale: &'a str,
    default_sort: SortOrder,
    scheme: &'static str,
    thresholds: ScriptThresholds,
    undated: &'static str,
    labels: ScriptLabels<'a>,
    clock_interval_ms: u64,
    refresh_interval_ms: u64,
}

#[derive(Serialize)]
struct ScriptThresholds {
    critical: i64,
    warning: i64,
    notice: i64,
}

#[derive(Serialize)]
struct ScriptLabels<'a> {
    ended: &'a str,
    undated: &'a str,
}
