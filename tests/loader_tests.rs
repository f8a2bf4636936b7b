mod common;

use apex::audit::Auditor;
use apex::error::ApexError;
use apex::events::{Category, EventId};
use apex::results::{load_records, load_results, read_csv_rows, read_json_rows, RecordRow, ResultRow};
use common::{sample_inputs, scorer_2025, SAMPLE_RESULTS_CSV};
use std::io::{Cursor, Write};
use std::sync::Arc;

fn sample_rows() -> Vec<ResultRow> {
    read_csv_rows(Cursor::new(SAMPLE_RESULTS_CSV)).expect("sample csv reads")
}

#[test]
fn test_csv_rows_decode() {
    let rows = sample_rows();
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(first.athlete_name, "Jordan Vale");
    assert_eq!(first.max_toss, "65'0\"");
    assert_eq!(first.the_push, Some(30));
    assert_eq!(first.speed_score, Some(168.0));
    assert_eq!(first.instagram_handle.as_deref(), Some("@jvale"));
    assert_eq!(first.to_raw_inputs(), sample_inputs());

    let second = &rows[1];
    assert_eq!(second.speed_score, None);
    assert_eq!(second.instagram_handle, None);
}

#[test]
fn test_csv_skips_bad_rows() {
    let data = "\
event_name,athlete_rank,athlete_name,apex_score,the_push
Open,1,Good Row,500.0,10
Open,first,Bad Rank,500.0,10
Open,3,Bad Reps,500.0,ten
Open,4,Also Good,400.0,12
";
    let rows: Vec<ResultRow> = read_csv_rows(Cursor::new(data)).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.athlete_name.as_str()).collect();
    assert_eq!(names, vec!["Good Row", "Also Good"]);
}

#[test]
fn test_blank_rep_cell_keeps_the_row() {
    let data = "\
event_name,athlete_rank,athlete_name,apex_score,fast_forty,the_push,the_pull
Open,1,No Push,300.0,4.80,,25
";
    let rows: Vec<ResultRow> = read_csv_rows(Cursor::new(data)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].the_push, None);
    assert_eq!(rows[0].the_pull, Some(25));

    let inputs = rows[0].to_raw_inputs();
    assert_eq!(inputs.push_reps, "");
    assert_eq!(inputs.pull_reps, "25");

    let entry = Auditor::new(Arc::new(scorer_2025())).audit_row(&rows[0]);
    assert!(!entry.card.complete);
    assert_eq!(entry.card.result.event(EventId::ThePush), 0);
    assert_eq!(entry.card.result.event(EventId::ThePull), 100);
    assert_eq!(entry.card.result.category(Category::Strength), 100);
    assert_eq!(entry.card.result.category(Category::Speed), 168);
}

#[test]
fn test_json_rows_skip_bad_entries() {
    let data = r#"[
        {"event_name": "Open", "athlete_name": "A", "apex_score": 600.0, "the_mile": "6:00"},
        {"event_name": "Open", "apex_score": 500.0},
        {"event_name": "Open", "athlete_name": "C", "apex_score": 410, "the_push": 12}
    ]"#;
    let rows: Vec<ResultRow> = read_json_rows(Cursor::new(data)).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].apex_score, 410.0);
    assert_eq!(rows[1].to_raw_inputs().push_reps, "12");
}

#[test]
fn test_file_with_no_decodable_rows_fails() {
    let data = "athlete_name,apex_score\nNobody,not-a-number\n";
    let err = read_csv_rows::<ResultRow, _>(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, ApexError::NoRows(_)));
    assert!(err.to_string().starts_with("no usable rows"));

    // Empty is fine: nothing failed.
    let rows: Vec<ResultRow> = read_json_rows(Cursor::new("[]")).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_json_that_is_not_an_array_fails() {
    let err = read_json_rows::<ResultRow, _>(Cursor::new("{\"rows\": []}")).unwrap_err();
    assert!(matches!(err, ApexError::Json(_)));
}

#[test]
fn test_load_results_picks_format_from_extension() {
    let mut csv_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(csv_file, "{}", SAMPLE_RESULTS_CSV).unwrap();
    let from_csv = load_results(csv_file.path()).unwrap();

    let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(json_file, "{}", serde_json::to_string(&from_csv).unwrap()).unwrap();
    let from_json = load_results(json_file.path()).unwrap();

    assert_eq!(from_csv, from_json);
}

#[test]
fn test_load_missing_file_is_io_error() {
    assert!(matches!(load_results("missing/results.csv"), Err(ApexError::Io(_))));
}

#[test]
fn test_record_rows_resolve_events_case_insensitively() {
    let data = r#"[
        {"category": "Speed", "event_name": "FAST FORTY", "gender": "Men", "record_holder": "A", "record_value": "4.31"},
        {"category": "Endurance", "event_name": "the mile", "gender": "Women", "record_holder": "B", "record_value": "4:52"},
        {"category": "Power", "event_name": "Max Toss", "gender": "Men", "record_holder": "C", "record_value": "74’6”"},
        {"category": "Other", "event_name": "Bench Press", "gender": "Men", "record_holder": "D", "record_value": "405"}
    ]"#;
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{}", data).unwrap();
    let records: Vec<RecordRow> = load_records(file.path()).unwrap();

    let events: Vec<Option<EventId>> = records.iter().map(|r| r.event()).collect();
    assert_eq!(
        events,
        vec![
            Some(EventId::FastForty),
            Some(EventId::TheMile),
            Some(EventId::MaxToss),
            None
        ]
    );
    assert!(records[1].is_gender("women"));

    let scorer = scorer_2025();
    let (toss, points) = scorer.measure(EventId::MaxToss, &records[2].record_value);
    assert!(toss.valid);
    assert_eq!(toss.magnitude, 894.0);
    assert_eq!(points, 82);
}

#[test]
fn test_audit_reproduces_stored_scores() {
    let auditor = Auditor::new(Arc::new(scorer_2025()));
    let entries = auditor.audit(&sample_rows());
    assert_eq!(entries.len(), 2);

    let exact = &entries[0];
    assert_eq!(exact.athlete_name, "Jordan Vale");
    assert!(exact.card.complete);
    assert_eq!(exact.stored_total, 657);
    assert_eq!(exact.total_delta, 0);
    assert_eq!(exact.category_deltas.len(), 4);
    assert!(exact.category_deltas.values().all(|&d| d == 0));
    assert!(exact.matches(0));
}

#[test]
fn test_audit_flags_drift() {
    let auditor = Auditor::new(Arc::new(scorer_2025()));
    let entries = auditor.audit(&sample_rows());

    let drifted = &entries[1];
    assert_eq!(drifted.stored_total, 650);
    assert_eq!(drifted.total_delta, 7);
    // No stored category columns on this row.
    assert!(drifted.category_deltas.is_empty());
    assert!(!drifted.matches(0));
    assert!(drifted.matches(7));
}

#[test]
fn test_audit_scores_incomplete_rows() {
    let mut row = sample_rows().remove(0);
    row.the_mile = String::new();
    let entry = Auditor::new(Arc::new(scorer_2025())).audit_row(&row);

    assert!(!entry.card.complete);
    assert_eq!(entry.card.result.category(Category::Endurance), 0);
    assert_eq!(entry.category_deltas[&Category::Endurance], -156);
    assert_eq!(entry.total_delta, -156);
}

#[test]
fn test_audit_preserves_row_order() {
    let mut rows = Vec::new();
    for i in 0..50u32 {
        let mut row = sample_rows().remove(0);
        row.athlete_rank = i;
        row.the_push = Some(i % 50);
        rows.push(row);
    }
    let entries = Auditor::new(Arc::new(scorer_2025())).audit(&rows);
    let ranks: Vec<u32> = entries.iter().map(|e| e.athlete_rank).collect();
    assert_eq!(ranks, (0..50).collect::<Vec<_>>());
}
