//! The dashboard page.
//!
//! The page is self-contained: styles, script, records and settings are all
//! inline and nothing is fetched at view time. The card grid is rendered once
//! here, as of the generation instant, so the page is useful without
//! scripting; the script replaces it on load and keeps it current.

use chrono::NaiveDateTime;
use eventboard_core::{views_at, EventList, SortOrder};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use tracing::debug;

use crate::card::card;
use crate::embed::embed_events;
use crate::error::RenderResult;
use crate::settings::PageSettings;

const STYLE: &str = include_str!("../assets/dashboard.css");
const SCRIPT: &str = include_str!("../assets/dashboard.js");

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Element ids shared with the page script.
pub mod ids {
    pub const EVENT_DATA: &str = "event-data";
    pub const SETTINGS: &str = "board-settings";
    pub const GRID: &str = "eventGrid";
    pub const CLOCK: &str = "clock";
    pub const SORT_SELECT: &str = "sortSelect";
}

/// Renders the complete page for `events` as of `generated_at`.
///
/// # Errors
///
/// Fails only if the embedded data cannot be serialized.
pub fn render_page(
    events: &EventList,
    settings: &PageSettings,
    generated_at: NaiveDateTime,
) -> RenderResult<String> {
    let events_json = embed_events(events)?;
    let settings_json = settings.script_json()?;
    let stamp = generated_at.format(STAMP_FORMAT).to_string();

    let views = views_at(
        events.as_slice(),
        settings.default_sort,
        generated_at,
        &settings.countdown,
    );
    debug!(cards = views.len(), sort = %settings.default_sort, "Rendering static snapshot");

    let markup = html! {
        (DOCTYPE)
        html lang=(settings.lang()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content=(concat!("eventboard ", env!("CARGO_PKG_VERSION")));
                title { (settings.title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="container" {
                    (header(settings))
                    noscript {
                        p class="snapshot-note" {
                            "스크립트가 꺼져 있어 " (stamp) " 기준으로 계산된 남은 시간이 표시됩니다."
                        }
                    }
                    div id=(ids::GRID) class="grid" {
                        @for view in &views {
                            (card(view))
                        }
                    }
                    footer {
                        @if let Some(text) = settings.footer.as_deref().filter(|t| !t.trim().is_empty()) {
                            div class="credit" { (text) }
                        }
                        div class="generated-at" { "생성: " (stamp) }
                    }
                }
                script id=(ids::EVENT_DATA) type="application/json" { (PreEscaped(events_json)) }
                script id=(ids::SETTINGS) type="application/json" { (PreEscaped(settings_json)) }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    };

    Ok(markup.into_string())
}

fn header(settings: &PageSettings) -> Markup {
    html! {
        header {
            div {
                h1 { (settings.title) }
            }
            div class="status-bar" {
                div id=(ids::CLOCK) class="current-time" { "로딩 중..." }
                div class="controls" {
                    label for=(ids::SORT_SELECT) { "정렬:" }
                    select id=(ids::SORT_SELECT) {
                        @for order in SortOrder::ALL {
                            option value=(order.as_str()) selected[order == settings.default_sort] {
                                (order.label())
                            }
                        }
                    }
                }
            }
        }
    }
}
