use std::fs;

use daybrief_core::{BriefingSource, ContentDocument, CoreError, DirSource, date};

/// Build a briefing tree:
///   briefings/index.json       — three entries plus one with a broken date
///   briefings/2024-03-10.json  — structured document
///   briefings/2024-03-09.md    — markup blob only
///   briefings/2024-03-08.json  — malformed, with an .md next to it
fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let briefings = dir.path().join("briefings");
    fs::create_dir(&briefings).unwrap();

    fs::write(
        briefings.join("index.json"),
        r#"[
            {"date": "2024-03-10", "title": "Sunday briefing"},
            {"date": "2024-03-09", "title": "Saturday briefing"},
            {"date": "garbage", "title": "should vanish"},
            {"date": "2024-03-08", "title": "Friday briefing"}
        ]"#,
    )
    .unwrap();

    fs::write(
        briefings.join("2024-03-10.json"),
        r#"{"sections": [{"title": "World", "stories": [
            {"headline": "h", "body": "b", "sources": [{"name": "AP", "url": "https://example.com"}]}
        ]}]}"#,
    )
    .unwrap();

    fs::write(briefings.join("2024-03-09.md"), "# Saturday\n\nMarkup body.\n").unwrap();

    fs::write(briefings.join("2024-03-08.json"), "{ not json").unwrap();
    fs::write(briefings.join("2024-03-08.md"), "Friday fallback.\n").unwrap();

    dir
}

#[tokio::test]
async fn index_loads_in_order_and_drops_bad_dates() {
    let dir = fixture();
    let source = DirSource::new(dir.path());

    let entries = source.fetch_index().await.unwrap();
    let isos: Vec<String> = entries.iter().map(|e| date::format_iso(e.date)).collect();
    assert_eq!(isos, ["2024-03-10", "2024-03-09", "2024-03-08"]);
    assert_eq!(entries[0].title, "Sunday briefing");
}

#[tokio::test]
async fn structured_json_is_preferred() {
    let dir = fixture();
    let source = DirSource::new(dir.path());

    let doc = source
        .fetch_content(date::parse_iso("2024-03-10").unwrap())
        .await
        .unwrap();
    let ContentDocument::Structured(sections) = doc else {
        panic!("expected structured content");
    };
    assert_eq!(sections[0].title, "World");
}

#[tokio::test]
async fn markup_serves_when_no_json_exists() {
    let dir = fixture();
    let source = DirSource::new(dir.path());

    let doc = source
        .fetch_content(date::parse_iso("2024-03-09").unwrap())
        .await
        .unwrap();
    assert_eq!(
        doc,
        ContentDocument::Markup("# Saturday\n\nMarkup body.\n".to_string())
    );
}

#[tokio::test]
async fn malformed_json_falls_back_to_markup() {
    let dir = fixture();
    let source = DirSource::new(dir.path());

    let doc = source
        .fetch_content(date::parse_iso("2024-03-08").unwrap())
        .await
        .unwrap();
    assert_eq!(doc, ContentDocument::Markup("Friday fallback.\n".to_string()));
}

#[tokio::test]
async fn missing_date_is_not_found() {
    let dir = fixture();
    let source = DirSource::new(dir.path());

    let err = source
        .fetch_content(date::parse_iso("2024-01-01").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(iso) if iso == "2024-01-01"));
}

#[tokio::test]
async fn missing_index_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = DirSource::new(dir.path());

    assert!(matches!(
        source.fetch_index().await.unwrap_err(),
        CoreError::Io(_)
    ));
}
