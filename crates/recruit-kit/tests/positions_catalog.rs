use chrono::NaiveDate;
use recruit_kit::sections::positions::{
    FilterCriteria, PositionBoard, PositionCatalog, RecencyWindow,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 16).expect("valid date")
}

#[test]
fn json_and_csv_exports_produce_the_same_board() {
    let from_json = PositionCatalog::from_path(fixture("positions.json")).expect("json loads");
    let from_csv = PositionCatalog::from_path(fixture("positions.csv")).expect("csv loads");

    let json_board = PositionBoard::new(from_json);
    let csv_board = PositionBoard::new(from_csv);

    assert_eq!(json_board.options(), csv_board.options());
    let criteria = FilterCriteria::default();
    let json_ids: Vec<String> = json_board
        .filter(&criteria, today())
        .into_iter()
        .map(|posting| posting.id)
        .collect();
    let csv_ids: Vec<String> = csv_board
        .filter(&criteria, today())
        .into_iter()
        .map(|posting| posting.id)
        .collect();
    assert_eq!(json_ids, csv_ids);
}

#[test]
fn catalog_board_sorts_iso_dated_posting_last() {
    let postings = PositionCatalog::from_path(fixture("positions.json")).expect("json loads");
    let board = PositionBoard::new(postings);

    let ids: Vec<String> = board
        .filter(&FilterCriteria::default(), today())
        .into_iter()
        .map(|posting| posting.id)
        .collect();

    assert_eq!(
        ids,
        vec![
            "pflegefachkraft-koeln",
            "kita-erzieher-bonn",
            "lager-duesseldorf",
            "empfang-koeln"
        ]
    );
}

#[test]
fn catalog_board_filters_recent_cologne_postings() {
    let postings = PositionCatalog::from_path(fixture("positions.json")).expect("json loads");
    let board = PositionBoard::new(postings);
    let criteria = FilterCriteria {
        region: Some("Köln".to_string()),
        recency_window: RecencyWindow::Last30Days,
        ..FilterCriteria::default()
    };

    let filtered = board.filter(&criteria, today());

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "pflegefachkraft-koeln");
    assert_eq!(board.options().regions, vec!["Bonn", "Düsseldorf", "Köln"]);
    assert_eq!(
        board.options().capacities,
        vec!["Minijob", "Schicht", "Teilzeit", "Vollzeit"]
    );
}

#[test]
fn missing_catalog_reports_io_error() {
    let error = PositionCatalog::from_path(fixture("does-not-exist.json"))
        .expect_err("missing file fails");
    assert!(error.to_string().contains("failed to read positions catalog"));
}
