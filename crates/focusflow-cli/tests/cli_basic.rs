//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated data
//! directory and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against the given data directory and return output.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "focusflow-cli", "--"])
        .args(args)
        .env("FOCUSFLOW_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_session_add_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["session", "add", "focus", "25"]);
    assert_eq!(code, 0, "session add failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "session_recorded");

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["total_focus_min"], 25);
    assert_eq!(stats["sessions_completed"], 1);
    assert_eq!(stats["current_streak"], 1);
}

#[test]
fn test_session_add_rejects_zero_minutes() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["session", "add", "focus", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error"));
}

#[test]
fn test_stats_goal_updates_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["stats", "goal", "90"]);
    assert_eq!(code, 0, "stats goal failed");

    let (stdout, _, _) = run_cli(dir.path(), &["stats", "show"]);
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["daily_goal_min"], 90);
}

#[test]
fn test_stats_weekly_has_seven_days() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["stats", "weekly"]);
    assert_eq!(code, 0, "stats weekly failed");
    let weekly: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(weekly.as_array().unwrap().len(), 7);
}

#[test]
fn test_timer_select_and_status() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["timer", "select", "short-break", "--minutes", "5"],
    );
    assert_eq!(code, 0, "timer select failed");
    let snap: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snap["session_type"], "short-break");
    assert_eq!(snap["remaining_secs"], 300);

    let (_, _, code) = run_cli(dir.path(), &["timer", "start"]);
    assert_eq!(code, 0, "timer start failed");

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    let first_line = stdout.lines().next().unwrap_or("{");
    assert!(first_line.starts_with('{'));
}

#[test]
fn test_timer_pause_and_reset() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["timer", "start"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(dir.path(), &["timer", "pause"]);
    assert_eq!(code, 0, "timer pause failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "timer_paused");

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "reset"]);
    assert_eq!(code, 0, "timer reset failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "timer_reset");
}

#[test]
fn test_settings_get_set_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["settings", "get", "theme"]);
    assert_eq!(code, 0, "settings get failed");
    assert_eq!(stdout.trim(), "blue");

    let (_, _, code) = run_cli(dir.path(), &["settings", "set", "theme", "green"]);
    assert_eq!(code, 0, "settings set failed");

    let (stdout, _, code) = run_cli(dir.path(), &["settings", "list"]);
    assert_eq!(code, 0, "settings list failed");
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(settings["theme"], "green");
}

#[test]
fn test_settings_set_rejects_bad_interval() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(
        dir.path(),
        &["settings", "set", "break_reminder_interval_min", "7"],
    );
    assert_ne!(code, 0);
}

#[test]
fn test_break_list_and_random() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["break", "list"]);
    assert_eq!(code, 0, "break list failed");
    let activities: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(activities.as_array().unwrap().len(), 3);

    let (stdout, _, code) = run_cli(dir.path(), &["break", "random"]);
    assert_eq!(code, 0, "break random failed");
    let activity: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(activity["id"].is_string());
}

#[test]
fn test_data_export_import_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["session", "add", "focus", "45"]);
    assert_eq!(code, 0);

    let export = dir.path().join("backup.json");
    let export_arg = export.to_str().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["data", "export", "--out", export_arg]);
    assert_eq!(code, 0, "data export failed");

    let other = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(other.path(), &["data", "import", export_arg]);
    assert_eq!(code, 0, "data import failed");

    let (stdout, _, _) = run_cli(other.path(), &["stats", "show"]);
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["total_focus_min"], 45);
}

#[test]
fn test_data_import_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["session", "add", "focus", "25"]);
    assert_eq!(code, 0);

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{\"sessions\": [{").unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["data", "import", bad.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error"));

    // Records untouched.
    let (stdout, _, _) = run_cli(dir.path(), &["stats", "show"]);
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["sessions_completed"], 1);
}
