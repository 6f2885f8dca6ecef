//! Preview command: print the countdowns the page would show.

use chrono::{Local, NaiveDateTime};
use eventboard_core::{
    format_lines, parse_timestamp, tier_counts, views_at, CountdownOptions, EventList, SortOrder,
};
use eventboard_source::{load_events, CsvSource};

use crate::commands::Paths;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Parses `--at`, defaulting to the current local time.
pub fn resolve_instant(at: Option<&str>) -> CliResult<NaiveDateTime> {
    match at {
        Some(raw) => parse_timestamp(raw).ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "cannot parse --at `{}` (expected YYYY-MM-DD[ HH:MM[:SS]])",
                raw
            ))
        }),
        None => Ok(Local::now().naive_local()),
    }
}

/// Formats the card list as of `at`, followed by a tier summary.
pub fn render(
    events: &EventList,
    options: &CountdownOptions,
    order: SortOrder,
    at: NaiveDateTime,
) -> String {
    let views = views_at(events.as_slice(), order, at, options);

    let mut out = format!("{} ({})\n", at.format("%Y-%m-%d %H:%M:%S"), order.label());
    for line in format_lines(&views) {
        out.push_str(&line);
        out.push('\n');
    }

    let summary: Vec<String> = tier_counts(&views)
        .into_iter()
        .map(|(class, count)| format!("{} {}", class, count))
        .collect();
    out.push_str(&format!("{} events: {}", views.len(), summary.join(", ")));
    out
}

/// Loads the source and prints the preview to stdout.
pub fn run(
    config: &AppConfig,
    paths: &Paths,
    at: Option<&str>,
    sort: Option<SortOrder>,
) -> CliResult<()> {
    let at = resolve_instant(at)?;
    let order = sort.unwrap_or(config.display.default_sort);

    let source = CsvSource::new(&paths.input).with_columns(config.source.columns.clone());
    let events = load_events(&source)?;
    if events.is_empty() {
        return Err(CliError::NoEvents(paths.input.display().to_string()));
    }

    println!("{}", render(&events, &config.countdown_options(), order, at));
    Ok(())
}
