//! Generate command: source → page.

use chrono::NaiveDateTime;
use eventboard_core::{tier_counts, views_at, EventList};
use eventboard_render::{render_page, write_atomic};
use eventboard_source::{load_events, CsvSource};
use tracing::info;

use crate::commands::Paths;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub events: usize,
    pub undated: usize,
    pub bytes: u64,
}

/// Loads the source, renders the page as of `now` and writes it.
///
/// Nothing is written unless every step before the write succeeds, and an
/// empty source is an error rather than an empty page.
pub fn run(config: &AppConfig, paths: &Paths, now: NaiveDateTime) -> CliResult<GenerateSummary> {
    if paths.output_replaces_input() {
        return Err(CliError::InvalidArgument(format!(
            "output {} would overwrite the source",
            paths.output.display()
        )));
    }

    let source = CsvSource::new(&paths.input).with_columns(config.source.columns.clone());
    let events = load_events(&source)?;
    if events.is_empty() {
        return Err(CliError::NoEvents(paths.input.display().to_string()));
    }

    log_tiers(&events, config, now);

    let html = render_page(&events, &config.page_settings(), now)?;
    let bytes = write_atomic(&paths.output, &html)?;

    Ok(GenerateSummary {
        events: events.len(),
        undated: events.undated_count(),
        bytes,
    })
}

fn log_tiers(events: &EventList, config: &AppConfig, now: NaiveDateTime) {
    let options = config.countdown_options();
    let views = views_at(events.as_slice(), config.display.default_sort, now, &options);
    for (class, count) in tier_counts(&views) {
        info!(tier = %class, count, "Snapshot tier");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    const CSV: &str = "제목,주최자_닉,주최자_식별코드,시작일,종료일,링크\n\
                       Spring Cup,방장,a1b2,2025-05-01,2025-06-01,http://x\n\
                       Open,부방장,c3d4,2025-05-02,,http://y\n";

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 30)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn paths_in(dir: &std::path::Path) -> Paths {
        Paths {
            input: dir.join("events.csv"),
            output: dir.join("index.html"),
        }
    }

    #[test]
    fn writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.input, CSV).unwrap();

        let summary = run(&AppConfig::default(), &paths, now()).unwrap();

        assert_eq!(summary.events, 2);
        assert_eq!(summary.undated, 1);
        let html = fs::read_to_string(&paths.output).unwrap();
        assert_eq!(summary.bytes, html.len() as u64);
        assert!(html.contains("Spring Cup"));
        assert!(html.contains("2일 23시간 59분 남음"));
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());

        let err = run(&AppConfig::default(), &paths, now()).unwrap_err();

        assert!(matches!(err, CliError::Source(ref e) if e.is_missing()));
        assert!(!paths.output.exists());
    }

    #[test]
    fn empty_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.input, "제목,주최자_닉,주최자_식별코드,시작일,종료일,링크\n").unwrap();

        let err = run(&AppConfig::default(), &paths, now()).unwrap_err();

        assert!(matches!(err, CliError::NoEvents(_)));
        assert!(!paths.output.exists());
    }

    #[test]
    fn unreadable_source_keeps_previous_page() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.input, "제목,링크\nCup,http://x\n").unwrap();
        fs::write(&paths.output, "previous").unwrap();

        let err = run(&AppConfig::default(), &paths, now()).unwrap_err();

        assert!(matches!(err, CliError::Source(_)));
        assert_eq!(fs::read_to_string(&paths.output).unwrap(), "previous");
    }

    #[test]
    fn refuses_to_overwrite_source() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("events.csv");
        fs::write(&input, CSV).unwrap();
        let paths = Paths {
            input: input.clone(),
            output: input.clone(),
        };

        let err = run(&AppConfig::default(), &paths, now()).unwrap_err();

        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert_eq!(fs::read_to_string(&input).unwrap(), CSV);
    }

    #[test]
    fn refuses_source_reached_through_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let input = dir.path().join("events.csv");
        fs::write(&input, CSV).unwrap();
        let paths = Paths {
            input: input.clone(),
            output: dir.path().join("sub/../events.csv"),
        };

        let err = run(&AppConfig::default(), &paths, now()).unwrap_err();

        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert_eq!(fs::read_to_string(&input).unwrap(), CSV);
    }

    #[cfg(unix)]
    #[test]
    fn refuses_output_symlinked_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.input, CSV).unwrap();
        std::os::unix::fs::symlink(&paths.input, &paths.output).unwrap();

        let err = run(&AppConfig::default(), &paths, now()).unwrap_err();

        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert_eq!(fs::read_to_string(&paths.input).unwrap(), CSV);
    }
}
