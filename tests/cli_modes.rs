//! Integration tests for the postbar binary
//!
//! Drives the real binary with HOME/XDG overrides pointing at temporary
//! directories, so config and cache come from the test and no network call
//! is ever needed (a fresh cache short-circuits the fetch; error paths fail
//! before reaching the network).

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const VALID_CONFIG: &str = r##"{
    "postal_code": "0150",
    "colors": {
        "today": "#00ff00",
        "tomorrow": "#ffff00",
        "someday": "#ffffff"
    }
}"##;

/// Helper to run the CLI against a temporary home directory
fn run_cli(home: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_postbar"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .output()
        .expect("Failed to execute postbar")
}

fn write_config(home: &TempDir, content: &str) {
    let dir = home.path().join("config").join("postbar");
    fs::create_dir_all(&dir).expect("Should create config dir");
    fs::write(dir.join("config.json"), content).expect("Should write config");
}

fn write_cache(home: &TempDir, content: &str) {
    let dir = home.path().join("cache").join("postbar");
    fs::create_dir_all(&dir).expect("Should create cache dir");
    fs::write(dir.join("postal.json"), content).expect("Should write cache");
}

#[test]
fn test_help_flag_exits_successfully() {
    let home = TempDir::new().unwrap();
    let output = run_cli(&home, &["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("postbar"), "Help should mention postbar");
}

#[test]
fn test_missing_config_prints_token_and_exits_zero() {
    let home = TempDir::new().unwrap();
    let output = run_cli(&home, &[]);

    assert!(
        output.status.success(),
        "Error paths must still exit with status 0"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "%{F#ff0000} Config missing");
}

#[test]
fn test_invalid_config_prints_token_and_exits_zero() {
    let home = TempDir::new().unwrap();
    write_config(&home, "{ not json");
    let output = run_cli(&home, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "%{F#ff0000} Config invalid");
}

#[test]
fn test_bar_mode_renders_fresh_cache_without_network() {
    let home = TempDir::new().unwrap();
    write_config(&home, VALID_CONFIG);
    write_cache(
        &home,
        r#"{ "nextDeliveryDays": ["today the 5th", "Wed Jan 7"] }"#,
    );

    let output = run_cli(&home, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "\u{f0e0} %{F#00ff00}Today");
}

#[test]
fn test_bar_mode_weekday_entry_uses_someday_color() {
    let home = TempDir::new().unwrap();
    write_config(&home, VALID_CONFIG);
    write_cache(&home, r#"{ "nextDeliveryDays": ["Wed Jan 7"] }"#);

    let output = run_cli(&home, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "\u{f0e0} %{F#ffffff}Wed");
}

#[test]
fn test_poisoned_cache_reports_no_data_and_exits_zero() {
    let home = TempDir::new().unwrap();
    write_config(&home, VALID_CONFIG);
    write_cache(&home, "{}");

    let output = run_cli(&home, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "%{F#ff0000} No data");
}

#[test]
fn test_unknown_positional_falls_back_to_bar_mode() {
    let home = TempDir::new().unwrap();
    write_config(&home, VALID_CONFIG);
    write_cache(&home, r#"{ "nextDeliveryDays": ["tomorrow the 6th"] }"#);

    let output = run_cli(&home, &["status"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "\u{f0e0} %{F#ffff00}Tomorrow");
}
