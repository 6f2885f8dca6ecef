//! End-to-end generation against a temporary directory.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use eventboard_cli::commands::{generate, Paths};
use eventboard_cli::config::AppConfig;

const HEADER: &str = "제목,주최자_닉,주최자_식별코드,시작일,종료일,링크,비고";

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn write_csv(dir: &Path, rows: &[&str]) -> Paths {
    let mut text = format!("\u{feff}{}\n", HEADER);
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let input = dir.join("events.csv");
    fs::write(&input, text).unwrap();
    Paths {
        input,
        output: dir.join("index.html"),
    }
}

fn data_block(html: &str) -> serde_json::Value {
    let open = r#"<script id="event-data" type="application/json">"#;
    let start = html.find(open).unwrap() + open.len();
    let len = html[start..].find("</script>").unwrap();
    serde_json::from_str(&html[start..start + len]).unwrap()
}

#[test]
fn spring_cup_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_csv(
        dir.path(),
        &[
            "Spring Cup,방장,a1b2,2025-05-01,2025-06-01,http://x,온라인",
            "Old Cup,방장,a1b2,2025-04-01,2025-04-30 18:00,http://old,",
            "Someday,누군가,z9,2025-05-10,미정,http://s,",
        ],
    );

    let summary = generate::run(&AppConfig::default(), &paths, now()).unwrap();
    assert_eq!(summary.events, 3);
    assert_eq!(summary.undated, 1);

    let html = fs::read_to_string(&paths.output).unwrap();
    assert!(html.contains(r#"<div class="timer-badge critical">2일 23시간 59분 남음</div>"#));
    assert!(html.contains(r#"<div class="timer-badge ended">종료됨</div>"#));

    let data = data_block(&html);
    assert_eq!(data[0]["title"], "Spring Cup");
    assert_eq!(data[0]["endDate"], "2025-06-01");
    assert_eq!(data[0]["endsAt"], "2025-06-01T23:59:59");
    assert_eq!(data[0]["extra"]["비고"], "온라인");
    assert_eq!(data[1]["endsAt"], "2025-04-30T18:00:00");
    assert_eq!(data[2]["endsAt"], serde_json::Value::Null);
    assert_eq!(data[2]["endDate"], "미정");
}

#[test]
fn hostile_cells_render_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let title = r#""</script><script>alert('x')</script>""#;
    let paths = write_csv(
        dir.path(),
        &[&format!("{},\"<b>me</b>\",id,2025-05-01,2025-06-01,http://x,", title)],
    );

    generate::run(&AppConfig::default(), &paths, now()).unwrap();

    let html = fs::read_to_string(&paths.output).unwrap();
    assert!(!html.contains("<script>alert"));
    assert!(!html.contains("<b>me</b>"));
    let data = data_block(&html);
    assert_eq!(data[0]["title"], "</script><script>alert('x')</script>");
    assert_eq!(data[0]["organizerName"], "<b>me</b>");
}

#[test]
fn configuration_shapes_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_csv(
        dir.path(),
        &[
            "B Cup,a,1,2025-05-01,2025-06-01,http://b,",
            "A Cup,a,1,2025-05-01,,http://a,",
        ],
    );
    let config_path = dir.path().join("eventboard.toml");
    fs::write(
        &config_path,
        r#"
[display]
title = "Puzzle Board"
footer = ""
default_sort = "title"
undated = "distinct"
"#,
    )
    .unwrap();

    let loaded = AppConfig::load(Some(config_path.as_path())).unwrap();
    generate::run(&loaded.config, &paths, now()).unwrap();

    let html = fs::read_to_string(&paths.output).unwrap();
    assert!(html.contains("<title>Puzzle Board</title>"));
    assert!(!html.contains("made by Bangbung Kim"));
    assert!(html.contains(r#"<option value="title" selected>"#));
    assert!(html.contains(r#"<div class="timer-badge undated">마감일 미정</div>"#));

    let a = html.find(r#"<h3 class="card-title">A Cup"#).unwrap();
    let b = html.find(r#"<h3 class="card-title">B Cup"#).unwrap();
    assert!(a < b);
}

#[test]
fn rerun_replaces_previous_page() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_csv(dir.path(), &["First,a,1,2025-05-01,2025-06-01,http://x,"]);
    generate::run(&AppConfig::default(), &paths, now()).unwrap();

    let paths = write_csv(dir.path(), &["Second,a,1,2025-05-01,2025-06-01,http://x,"]);
    generate::run(&AppConfig::default(), &paths, now()).unwrap();

    let html = fs::read_to_string(&paths.output).unwrap();
    assert!(html.contains("Second"));
    assert!(!html.contains("First"));
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 2);
}
