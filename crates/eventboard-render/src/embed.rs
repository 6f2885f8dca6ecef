//! Boundary-safe data embedding.
//!
//! Records reach the page as JSON inside a
//! `<script type="application/json">` element. Plain JSON is not safe there:
//! a title containing `</script>` would close the element early. After
//! serialization every `<`, `>` and `&` is rewritten as a `\uXXXX` escape, as
//! are U+2028 and U+2029. Those characters can only occur inside JSON
//! strings, so the result is still valid JSON that decodes to the same
//! values.

use std::collections::BTreeMap;

use eventboard_core::{format_iso, EventList, EventRecord};
use serde::Serialize;

use crate::error::RenderResult;

/// One record as the page script sees it.
///
/// Every source field is carried verbatim; `startsAt` and `endsAt` are the
/// normalized timestamps (`YYYY-MM-DDTHH:MM:SS`) or `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedEvent<'a> {
    pub title: &'a str,
    pub organizer_name: &'a str,
    pub organizer_id: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub link: &'a str,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub extra: &'a BTreeMap<String, String>,
}

impl<'a> From<&'a EventRecord> for EmbeddedEvent<'a> {
    fn from(record: &'a EventRecord) -> Self {
        Self {
            title: record.title(),
            organizer_name: record.organizer_name(),
            organizer_id: record.organizer_id(),
            start_date: record.start_date(),
            end_date: record.end_date(),
            link: record.link(),
            starts_at: record.starts_at().as_ref().map(format_iso),
            ends_at: record.ends_at().as_ref().map(format_iso),
            extra: record.extra(),
        }
    }
}

/// Serializes a value as JSON that can sit inside a script element.
pub fn embed_json<T: Serialize + ?Sized>(value: &T) -> RenderResult<String> {
    let json = serde_json::to_string(value)?;
    Ok(escape_for_script(&json))
}

/// Serializes the record list in source order.
pub fn embed_events(events: &EventList) -> RenderResult<String> {
    let embedded: Vec<EmbeddedEvent<'_>> = events.iter().map(EmbeddedEvent::from).collect();
    embed_json(&embedded)
}

fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}
