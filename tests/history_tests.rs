use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;

mod common;
use common::{api_server, dead_base_url, latest_trip, rg_at, trip_list};

#[test]
fn test_history_list() {
    let base = api_server(None, trip_list());

    let out = rg_at(&base, &["history"]).output().expect("run history");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.contains("Trip History"));

    let rows: Vec<&str> = stdout
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .collect();
    assert_eq!(rows.len(), 2, "expected one row per trip:\n{stdout}");
    assert!(rows[0].contains("Sat, 1 Mar 2025"));
    assert!(rows[0].contains("10:00 → 10:42"));
    assert!(rows[0].contains("3 events"));
    assert!(rows[1].contains("Thu, 27 Feb 2025"));
    assert!(rows[1].contains("18:05 → --:--"));
    assert!(rows[1].contains("In progress"));
    assert!(rows[1].contains("0 events"));
}

#[test]
fn test_history_empty_list() {
    let base = api_server(None, json!([]));

    rg_at(&base, &["history"])
        .assert()
        .success()
        .stdout(contains("Trip History"))
        .stdout(contains("No trips recorded yet"))
        .stdout(contains("Complete a drive").not());
}

#[test]
fn test_history_unreachable_server() {
    rg_at(&dead_base_url(), &["history"])
        .assert()
        .success()
        .stdout(contains("No trips recorded yet"))
        .stdout(contains("Trip History").not());
}

#[test]
fn test_history_trip_detail_by_id() {
    let base = api_server(None, trip_list());

    rg_at(&base, &["history", "--trip", "12"])
        .assert()
        .success()
        .stdout(contains("← Back to History"))
        .stdout(contains("Trip Detail"))
        .stdout(contains("Sat, 1 Mar 2025"))
        .stdout(contains("[1 Low]  [0 Medium]  [2 High]"));
}

#[test]
fn test_history_detail_without_events() {
    let base = api_server(None, trip_list());

    rg_at(&base, &["history", "--trip", "11"])
        .assert()
        .success()
        .stdout(contains("No events this trip"))
        .stdout(contains("--:--"));
}

#[test]
fn test_history_unknown_trip_id_fails() {
    let base = api_server(None, trip_list());

    rg_at(&base, &["history", "--trip", "999"])
        .assert()
        .failure()
        .stderr(contains("Trip not found: 999"));
}

#[test]
fn test_history_interactive_select_and_back() {
    let base = api_server(Some(latest_trip()), trip_list());

    let out = rg_at(&base, &["history", "--interactive"])
        .write_stdin("1\nb\n2\nq\n")
        .output()
        .expect("run interactive history");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("Trip History").count(), 2);
    assert_eq!(stdout.matches("Trip Detail").count(), 2);
    assert!(stdout.contains("Eyes closed for 4s"));
    assert!(stdout.contains("No events this trip"));
}

#[test]
fn test_history_rows_are_aligned_columns() {
    let base = api_server(None, trip_list());

    let out = rg_at(&base, &["history"]).output().expect("run history");
    let stdout = String::from_utf8_lossy(&out.stdout);

    let row = regex::Regex::new(
        r"(?m)^1\s{2,}Sat, 1 Mar 2025\s{2,}10:00 → 10:42\s{2,}42 mins\s{2,}3 events$",
    )
    .unwrap();
    assert!(row.is_match(&stdout), "unexpected layout:\n{stdout}");
}
