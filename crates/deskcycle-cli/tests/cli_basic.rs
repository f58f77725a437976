//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "deskcycle-cli", "--"])
        .args(args)
        .env("DESKCYCLE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn timer_status_prints_snapshot() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    assert!(stdout.contains("StateSnapshot"));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json.get("remaining_secs").is_some());
    assert!(json.get("pushup_count").is_some());
}

#[test]
fn full_cycle_via_cli() {
    let (_, _, code) = run_cli(&["timer", "reset"]);
    assert_eq!(code, 0, "timer reset failed");

    // Completing push-ups is rejected outside the push-up step.
    let (_, stderr, code) = run_cli(&["pushups", "complete"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no push-up step in progress"));

    let (stdout, _, code) = run_cli(&["timer", "start"]);
    assert_eq!(code, 0, "timer start failed");
    assert!(stdout.contains("StandingStarted"));

    let (stdout, _, code) = run_cli(&["timer", "finish"]);
    assert_eq!(code, 0, "timer finish failed");
    assert!(stdout.contains("PushupsDue"));

    run_cli(&["pushups", "add"]);
    run_cli(&["pushups", "add"]);
    let (stdout, _, code) = run_cli(&["pushups", "add"]);
    assert_eq!(code, 0, "pushups add failed");
    assert_eq!(stdout.trim(), "3");

    let (stdout, _, _) = run_cli(&["pushups", "sub"]);
    assert_eq!(stdout.trim(), "2");

    let (stdout, _, code) = run_cli(&["pushups", "complete"]);
    assert_eq!(code, 0, "pushups complete failed");
    assert!(stdout.contains("SittingStarted"));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["pushups"], 2);

    let (stdout, _, _) = run_cli(&["timer", "status"]);
    assert!(stdout.contains(r#""state": "sitting""#));

    let (_, _, code) = run_cli(&["timer", "reset"]);
    assert_eq!(code, 0);
}

#[test]
fn settings_roundtrip() {
    let (stdout, _, code) = run_cli(&["settings", "set", "--standing", "25", "--sitting", "35"]);
    assert_eq!(code, 0, "settings set failed");
    assert!(stdout.contains("Settings saved"));

    let (stdout, _, code) = run_cli(&["settings", "show"]);
    assert_eq!(code, 0, "settings show failed");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["standing"], 1500);
    assert_eq!(json["sitting"], 2100);
}

#[test]
fn settings_rejects_out_of_range_minutes() {
    let (_, stderr, code) = run_cli(&["settings", "set", "--standing", "0", "--sitting", "35"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("standing"));

    let (_, _, code) = run_cli(&["settings", "set", "--standing", "25", "--sitting", "121"]);
    assert_ne!(code, 0);
}

#[test]
fn stats_today_is_always_a_session() {
    let (stdout, _, code) = run_cli(&["stats", "today"]);
    assert_eq!(code, 0, "stats today failed");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json.get("standingTime").is_some());
    assert!(json.get("pushups").is_some());
}

#[test]
fn stats_all_prints_totals() {
    let (stdout, _, code) = run_cli(&["stats", "all"]);
    assert_eq!(code, 0, "stats all failed");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json.get("total_pushups").is_some());
}

#[test]
fn stats_week_has_seven_days() {
    let (stdout, _, code) = run_cli(&["stats", "week"]);
    assert_eq!(code, 0, "stats week failed");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(7));
}
