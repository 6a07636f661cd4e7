mod common;
use common::rg;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// A fake HOME whose config file holds an invalid base URL.
fn home_with_broken_config(name: &str) -> PathBuf {
    let home = std::env::temp_dir().join(format!("{name}_roadguard_home"));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(home.join(".roadguard")).unwrap();
    fs::write(home.join(".roadguard/roadguard.conf"), "base_url: localhost\n").unwrap();
    home
}

#[test]
fn test_init_in_test_mode_does_not_write() {
    rg()
        .args(["--test", "--base-url", "http://10.0.0.7:8000", "init"])
        .assert()
        .success()
        .stdout(contains("API base URL : http://10.0.0.7:8000"))
        .stdout(contains("initialization completed"));
}

#[test]
fn test_config_print_reflects_overrides() {
    rg()
        .args([
            "--test",
            "--plain",
            "--zone",
            "utc",
            "--base-url",
            "https://trips.example.org",
            "config",
            "--print",
        ])
        .assert()
        .success()
        .stdout(contains("base_url: https://trips.example.org"))
        .stdout(contains("time_zone: utc"))
        .stdout(contains("color: false"));
}

#[test]
fn test_utc_and_zone_conflict() {
    rg()
        .args(["--test", "--utc", "--zone", "local", "latest"])
        .assert()
        .failure();
}

#[test]
fn test_broken_config_blocks_fetch_commands() {
    let home = home_with_broken_config("broken_latest");

    rg().env("HOME", &home)
        .args(["latest"])
        .assert()
        .failure()
        .stderr(contains("Error: Configuration error"));
}

#[test]
fn test_broken_config_can_still_be_printed() {
    let home = home_with_broken_config("broken_print");

    rg().env("HOME", &home)
        .args(["--plain", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Ignoring invalid config file"))
        .stdout(contains("base_url: http://127.0.0.1:8000"));
}

#[test]
fn test_init_repairs_broken_config() {
    let home = home_with_broken_config("broken_init");

    rg().env("HOME", &home)
        .args(["--plain", "--base-url", "http://1.2.3.4:8000", "init"])
        .assert()
        .success();

    let conf = fs::read_to_string(home.join(".roadguard/roadguard.conf")).unwrap();
    assert!(conf.contains("base_url: http://1.2.3.4:8000"));
}

#[test]
fn test_edit_repairs_broken_config() {
    let home = home_with_broken_config("broken_edit");

    // `tee FILE` stands in for an editor: it writes stdin to the file
    rg().env("HOME", &home)
        .args(["--plain", "config", "--edit", "--editor", "tee"])
        .write_stdin("base_url: http://5.6.7.8:8000\n")
        .assert()
        .success()
        .stdout(contains("edited using 'tee'"));

    let conf = fs::read_to_string(home.join(".roadguard/roadguard.conf")).unwrap();
    assert_eq!(conf, "base_url: http://5.6.7.8:8000\n");
}
