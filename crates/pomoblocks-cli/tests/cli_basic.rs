//! Basic CLI tests.
//!
//! Each test runs the binary against its own data directory.

mod common;

use chrono::Duration;
use common::{parse_json, Sandbox};
use predicates::prelude::*;

#[test]
fn test_timer_status_defaults_to_short() {
    let sb = Sandbox::new();
    let status = parse_json(&sb.run_success(&["timer", "status"]));
    assert_eq!(status["type"], "state_snapshot");
    assert_eq!(status["mode"], "short");
    assert_eq!(status["remaining_secs"], 1500);
    assert_eq!(status["clock"], "25:00");
    assert_eq!(status["running"], false);
}

#[test]
fn test_timer_start_and_pause() {
    let sb = Sandbox::new();
    let started = parse_json(&sb.run_success(&["timer", "start"]));
    assert_eq!(started["type"], "timer_started");

    let status = parse_json(&sb.run_success(&["timer", "status"]));
    assert_eq!(status["running"], true);

    let paused = parse_json(&sb.run_success(&["timer", "pause"]));
    assert_eq!(paused["type"], "timer_paused");
}

#[test]
fn test_timer_mode_switch() {
    let sb = Sandbox::new();
    sb.run_success(&["timer", "start"]);
    let changed = parse_json(&sb.run_success(&["timer", "mode", "long"]));
    assert_eq!(changed["type"], "mode_changed");
    assert_eq!(changed["remaining_secs"], 3000);

    let status = parse_json(&sb.run_success(&["timer", "status"]));
    assert_eq!(status["mode"], "long");
    assert_eq!(status["running"], false);
}

#[test]
fn test_timer_mode_rejects_unknown() {
    let sb = Sandbox::new();
    sb.cli().args(["timer", "mode", "medium"]).assert().failure();
}

#[test]
fn test_timer_reset() {
    let sb = Sandbox::new();
    let reset = parse_json(&sb.run_success(&["timer", "reset"]));
    assert_eq!(reset["type"], "timer_reset");
}

#[test]
fn test_log_save_requires_user() {
    let sb = Sandbox::new();
    sb.cli()
        .args(["log", "save", "--title", "Draft"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not signed in"));

    let list = parse_json(&sb.run_success(&["log", "list"]));
    assert_eq!(list.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_login_save_list_summary() {
    let sb = Sandbox::new();
    sb.cli()
        .args(["user", "login", "ada@example.com", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@example.com"));

    let saved = parse_json(&sb.run_success(&["log", "save", "--title", "Draft", "--notes", "n"]));
    assert_eq!(saved["type"], "entry_saved");
    assert_eq!(saved["duration_secs"], 0);

    let list = parse_json(&sb.run_success(&["log", "list"]));
    let entries = list.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "Draft");
    assert_eq!(entries[0]["notes"], "n");

    let summary = parse_json(&sb.run_success(&["log", "summary"]));
    assert_eq!(summary.as_array().unwrap().len(), 1);
    assert_eq!(summary[0]["entries"], 1);
}

#[test]
fn test_user_logout() {
    let sb = Sandbox::new();
    sb.run_success(&["user", "login", "ada"]);
    let status = parse_json(&sb.run_success(&["user", "status"]));
    assert_eq!(status["identifier"], "ada");

    sb.run_success(&["user", "logout"]);
    sb.cli()
        .args(["user", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not signed in"));
}

#[test]
fn test_export_csv_stdout_and_file() {
    let sb = Sandbox::new();
    sb.run_success(&["user", "login", "ada"]);
    sb.run_success(&["log", "save", "--title", "One"]);
    sb.run_success(&["log", "save", "--title", "Two"]);

    let csv = sb.run_success(&["export", "csv"]);
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "\"Timestamp\",\"Duration\",\"Title\",\"Notes\"");
    assert!(lines[1].ends_with("\"00:00\",\"One\",\"\""));

    let out = sb.path().join("exports");
    std::fs::create_dir_all(&out).unwrap();
    let printed = sb.run_success(&["export", "csv", "--out", out.to_str().unwrap()]);
    assert!(printed.trim_end().ends_with("pomodoro_blocks.csv"));
    assert!(out.join("pomodoro_blocks.csv").exists());
}

#[test]
fn test_export_markdown() {
    let sb = Sandbox::new();
    sb.run_success(&["user", "login", "ada"]);
    sb.run_success(&["log", "save", "--title", "Focus", "--notes", "deep"]);
    let md = sb.run_success(&["export", "markdown"]);
    assert!(md.starts_with("# Focus\n- Duration: 00:00\n- Timestamp: "));
    assert!(md.trim_end().ends_with("#pomodoro"));
}

#[test]
fn test_export_open_prints_url() {
    let sb = Sandbox::new();
    sb.run_success(&["user", "login", "ada"]);
    sb.run_success(&["log", "save", "--title", "Focus"]);

    let url = sb.run_success(&["export", "open", "drafts", "--print"]);
    assert!(url.starts_with("drafts://x-callback-url/create?text=%23%20Focus"));

    sb.run_success(&["config", "set", "export.open_urls", "false"]);
    let url = sb.run_success(&["export", "open"]);
    assert!(url.starts_with("obsidian://new?content="));

    sb.cli().args(["export", "open", "notion"]).assert().failure();
}

#[test]
fn test_config_get_set_list() {
    let sb = Sandbox::new();
    let value = sb.run_success(&["config", "get", "timer.default_mode"]);
    assert_eq!(value.trim(), "short");

    sb.run_success(&["config", "set", "timer.default_mode", "long"]);
    let status = parse_json(&sb.run_success(&["timer", "status"]));
    assert_eq!(status["remaining_secs"], 3000);

    let list = parse_json(&sb.run_success(&["config", "list"]));
    assert_eq!(list["notifications"]["sound_enabled"], true);

    sb.cli()
        .args(["config", "get", "timer.nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key"));
}

#[test]
fn test_completions() {
    let sb = Sandbox::new();
    sb.cli()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomoblocks"));
}

#[test]
fn test_status_reports_missed_completion_on_stderr() {
    let sb = Sandbox::new();
    sb.seed_running_engine(Duration::hours(2));

    let (stdout, stderr) = sb.run_with_stderr(&["timer", "status"]);
    let status = parse_json(&stdout);
    assert_eq!(status["type"], "state_snapshot");
    assert_eq!(status["remaining_secs"], 0);
    assert_eq!(status["running"], false);

    assert!(stderr.contains("\u{7}"));
    let completed = stderr
        .lines()
        .find(|line| line.contains("session_completed"))
        .expect("completion on stderr");
    let completed = parse_json(completed.trim_start_matches('\u{7}'));
    assert_eq!(completed["duration_secs"], 1500);

    // Reported once; the finished state was persisted.
    let (_, stderr) = sb.run_with_stderr(&["timer", "status"]);
    assert!(!stderr.contains("session_completed"));
}

#[test]
fn test_log_save_reports_missed_completion() {
    let sb = Sandbox::new();
    sb.run_success(&["user", "login", "ada"]);
    sb.seed_running_engine(Duration::hours(2));

    let (stdout, stderr) = sb.run_with_stderr(&["log", "save", "--title", "x"]);
    let saved = parse_json(&stdout);
    assert_eq!(saved["type"], "entry_saved");
    assert_eq!(saved["duration_secs"], 1500);
    assert!(stderr.contains("session_completed"));
    assert!(stderr.contains("\u{7}"));
}

#[test]
fn test_missed_completion_respects_sound_setting() {
    let sb = Sandbox::new();
    sb.run_success(&["config", "set", "notifications.sound_enabled", "false"]);
    sb.seed_running_engine(Duration::hours(2));

    let (_, stderr) = sb.run_with_stderr(&["timer", "status"]);
    assert!(stderr.contains("session_completed"));
    assert!(!stderr.contains("\u{7}"));
}

#[test]
fn test_timer_run_counts_down_to_completion() {
    let sb = Sandbox::new();
    sb.seed_running_engine(Duration::seconds(1498));

    let (stdout, stderr) = sb.run_with_stderr(&["timer", "run"]);
    let completed = parse_json(&stdout);
    assert_eq!(completed["type"], "session_completed");
    assert_eq!(completed["mode"], "short");
    assert!(stderr.contains("\u{7}"));

    let status = parse_json(&sb.run_success(&["timer", "status"]));
    assert_eq!(status["remaining_secs"], 0);
    assert_eq!(status["running"], false);
}
