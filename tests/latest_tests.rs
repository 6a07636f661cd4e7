use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{api_server, dead_base_url, event, latest_trip, rg, rg_at, spawn_server};

#[test]
fn test_latest_trip_summary() {
    let base = api_server(Some(latest_trip()), serde_json::json!([]));

    rg_at(&base, &["latest"])
        .assert()
        .success()
        .stdout(contains("Latest Trip Summary"))
        .stdout(contains("Saturday, 1 March 2025"))
        .stdout(contains("10:00  10:42  42 mins"))
        .stdout(contains("[1 Low]  [0 Medium]  [2 High]"))
        .stdout(contains("● 10:10  Eyes closed for 4s  [High]"))
        .stdout(contains("● 10:20  Eyes closed for 2s  [Low]"))
        .stdout(contains("● 10:31  Eyes closed for 3s  [High]"));
}

#[test]
fn test_latest_trip_404_shows_placeholder() {
    let base = api_server(None, serde_json::json!([]));

    rg_at(&base, &["latest"])
        .assert()
        .success()
        .stdout(contains("No trips recorded yet"))
        .stdout(contains("Complete a drive to see your summary"))
        .stdout(contains("Latest Trip Summary").not());
}

#[test]
fn test_latest_unreachable_server_shows_placeholder() {
    let base = dead_base_url();

    rg_at(&base, &["latest"])
        .assert()
        .success()
        .stdout(contains("No trips recorded yet"));
}

#[test]
fn test_latest_garbage_body_shows_placeholder() {
    use axum::routing::get;

    let router = axum::Router::new().route("/api/trip/latest/", get(|| async { "<html>oops</html>" }));
    let base = spawn_server(router);

    rg_at(&base, &["latest"])
        .assert()
        .success()
        .stdout(contains("No trips recorded yet"));
}

#[test]
fn test_latest_unknown_severity_is_counted() {
    let mut trip = latest_trip();
    trip["events"][1]["severity"] = serde_json::json!("critical");
    let base = api_server(Some(trip), serde_json::json!([]));

    rg_at(&base, &["latest"])
        .assert()
        .success()
        .stdout(contains("[0 Low]  [0 Medium]  [2 High]  [1 Unknown]"));
}

#[test]
fn test_base_url_with_trailing_slash() {
    let base = api_server(Some(latest_trip()), serde_json::json!([]));

    rg_at(&format!("{base}/"), &["latest"])
        .assert()
        .success()
        .stdout(contains("42 mins"));
}

#[test]
fn test_invalid_base_url_fails() {
    rg()
        .args(["--test", "--base-url", "not-a-url", "latest"])
        .assert()
        .failure()
        .stderr(contains("Error: Configuration error"));
}

#[test]
fn test_out_of_order_events_warn_by_default() {
    let mut trip = latest_trip();
    trip["events"] = serde_json::json!([
        event(1, "2025-03-01T10:20:00Z", "low", 2.0),
        event(2, "2025-03-01T10:05:00Z", "high", 4.0),
    ]);
    let base = api_server(Some(trip), serde_json::json!([]));

    rg_at(&base, &["latest"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(contains("not in chronological order"))
        .stdout(contains("● 10:20  Eyes closed for 2s  [Low]"));
}
