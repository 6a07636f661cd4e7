#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::{Value, json};
use std::env;
use std::path::PathBuf;

pub fn rg() -> Command {
    cargo_bin_cmd!("roadguard")
}

/// `roadguard --test --plain --utc --base-url <base> <args...>`
pub fn rg_at(base: &str, args: &[&str]) -> Command {
    let mut cmd = rg();
    cmd.args(["--test", "--plain", "--utc", "--base-url", base]);
    cmd.args(args);
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roadguard_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// Serve `router` on an ephemeral loopback port from a background thread.
/// Returns the base URL (no trailing slash).
pub fn spawn_server(router: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.set_nonblocking(true).expect("nonblocking");
    let addr = listener.local_addr().expect("addr");

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("listener");
            axum::serve(listener, router).await.expect("serve");
        });
    });

    format!("http://{addr}")
}

/// A base URL where nothing is listening.
pub fn dead_base_url() -> String {
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        l.local_addr().expect("addr").port()
    };
    format!("http://127.0.0.1:{port}")
}

pub fn event(id: i64, ts: &str, severity: &str, duration: f64) -> Value {
    json!({ "id": id, "timestamp": ts, "severity": severity, "duration": duration })
}

/// Trip 12: high(4s), low(2s), high(3s) on Saturday 1 March 2025.
pub fn latest_trip() -> Value {
    json!({
        "id": 12,
        "start_time": "2025-03-01T10:00:00Z",
        "end_time": "2025-03-01T10:42:00Z",
        "duration": "42 mins",
        "events": [
            event(1, "2025-03-01T10:10:00Z", "high", 4.0),
            event(2, "2025-03-01T10:20:00.123456Z", "low", 2.0),
            event(3, "2025-03-01T10:31:00Z", "high", 3.0),
        ]
    })
}

pub fn trip_list() -> Value {
    json!([
        latest_trip(),
        {
            "id": 11,
            "start_time": "2025-02-27T18:05:00Z",
            "end_time": null,
            "duration": "In progress",
            "events": []
        }
    ])
}

/// Server answering both endpoints with fixed JSON bodies.
pub fn api_server(latest: Option<Value>, trips: Value) -> String {
    let router = Router::new()
        .route(
            "/api/trip/latest/",
            get(move || {
                let latest = latest.clone();
                async move {
                    match latest {
                        Some(trip) => (StatusCode::OK, axum::Json(trip)).into_response(),
                        None => (
                            StatusCode::NOT_FOUND,
                            axum::Json(json!({ "message": "No trips recorded yet" })),
                        )
                            .into_response(),
                    }
                }
            }),
        )
        .route(
            "/api/trips/",
            get(move || {
                let trips = trips.clone();
                async move { axum::Json(trips) }
            }),
        );
    spawn_server(router)
}
