//! Integration tests for the `huddle` CLI binary.
//!
//! These drive the recommend, query, preview and times subcommands through
//! the actual binary against the fixtures in `tests/fixtures/`.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn team_csv() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/team.csv")
}

fn bad_header_csv() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bad_header.csv")
}

fn huddle() -> Command {
    let mut cmd = Command::cargo_bin("huddle").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// recommend
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn recommend_text_ranks_each_weekday() {
    huddle()
        .args(["recommend", "-i", team_csv()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Meeting Recommendations"))
        // Monday: Alice and Bob share 10:00-11:00.
        .stdout(predicate::str::contains("#1 10:00 - 11:00 (1h)  score 20"))
        // Tuesday: all three share 10:00-11:00.
        .stdout(predicate::str::contains("#1 10:00 - 11:00 (1h)  score 30"))
        .stdout(predicate::str::contains("Available: Alice, Bob, Carol"));
}

#[test]
fn recommend_reports_empty_days() {
    huddle()
        .args(["recommend", "-i", team_csv(), "--start", "16:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No optimal times found"))
        .stdout(predicate::str::contains("Try adjusting start time"));
}

#[test]
fn recommend_csv_export() {
    huddle()
        .args(["recommend", "-i", team_csv(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Day,Rank,Start Time,End Time,Duration,Fully Available Count,Fully Available Names",
        ))
        .stdout(predicate::str::contains(
            "Tuesday,#1,10:00,11:00,1h,3,\"Alice, Bob, Carol\"",
        ));
}

#[test]
fn recommend_json_is_valid() {
    let output = huddle()
        .args(["recommend", "-i", team_csv(), "--format", "json"])
        .output()
        .expect("recommend should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    assert_eq!(json["Wednesday"][0]["start"], "13:00");
    assert_eq!(json["Wednesday"][0]["end"], "14:00");
    assert_eq!(json["Wednesday"][0]["score"], 20);
}

#[test]
fn recommend_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.csv");

    huddle()
        .args(["recommend", "-i", team_csv(), "--format", "csv", "-o"])
        .arg(&path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).expect("output file must exist");
    assert!(content.contains("Monday,#1,10:00,11:00"));
}

#[test]
fn recommend_save_uses_default_file_name() {
    let dir = tempfile::tempdir().unwrap();

    huddle()
        .current_dir(dir.path())
        .args(["recommend", "-i", team_csv(), "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved top-meeting-recommendations.csv"));

    assert!(dir.path().join("top-meeting-recommendations.csv").exists());
}

#[test]
fn verbose_logs_to_stderr_and_keeps_stdout_clean() {
    let output = huddle()
        .args(["recommend", "-v", "-i", team_csv(), "--format", "json"])
        .output()
        .expect("recommend should run");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loaded roster"), "stderr was: {stderr}");
    assert!(stderr.contains("ranked meeting slots"), "stderr was: {stderr}");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must stay pure JSON");
    assert_eq!(json["Monday"][0]["start"], "10:00");
}

#[test]
fn quiet_by_default() {
    huddle()
        .args(["recommend", "-i", team_csv()])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn recommend_rejects_invalid_start() {
    huddle()
        .args(["recommend", "-i", team_csv(), "--start", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time"));
}

// ─────────────────────────────────────────────────────────────────────────────
// query
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn query_text_groups_people() {
    huddle()
        .args([
            "query", "-i", team_csv(), "--day", "Monday", "--start", "09:00", "--end", "11:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Availability for Monday 09:00 - 11:00"))
        .stdout(predicate::str::contains("Fully Available (1): Alice"))
        .stdout(predicate::str::contains("Partially Available (1): Bob"))
        .stdout(predicate::str::contains("Not Available (1): Carol"));
}

#[test]
fn query_accepts_lowercase_day() {
    huddle()
        .args([
            "query", "-i", team_csv(), "--day", "tuesday", "--start", "10:00", "--end", "11:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fully Available (3): Alice, Bob, Carol"));
}

#[test]
fn query_reversed_range_fails() {
    huddle()
        .args([
            "query", "-i", team_csv(), "--day", "Monday", "--start", "10:00", "--end", "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("End time must be after start time"));
}

#[test]
fn query_unknown_day_fails() {
    huddle()
        .args(["query", "-i", team_csv(), "--day", "Saturday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown weekday"));
}

#[test]
fn query_csv_export() {
    huddle()
        .args([
            "query", "-i", team_csv(), "--day", "Thursday", "--start", "14:00", "--end", "15:00",
            "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thursday,14:00 - 15:00,Fully Available,\"Alice, Bob\"",
        ))
        .stdout(predicate::str::contains("Thursday,14:00 - 15:00,Not Available,Carol"));
}

#[test]
fn query_save_uses_default_file_name() {
    let dir = tempfile::tempdir().unwrap();

    huddle()
        .current_dir(dir.path())
        .args([
            "query", "-i", team_csv(), "--day", "Friday", "--start", "09:00", "--end", "10:00",
            "--save",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved availability-query-Friday-0900-1000.csv",
        ));

    let saved = dir.path().join("availability-query-Friday-0900-1000.csv");
    let content = std::fs::read_to_string(saved).expect("saved file must exist");
    assert!(content.starts_with("Query Day,Query Time Range,Availability Status,Names"));
    assert!(content.contains("Friday,09:00 - 10:00,Fully Available,Alice"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading, preview and times
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bad_header_is_reported() {
    huddle()
        .args(["preview", "-i", bad_header_csv()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load roster"));
}

#[test]
fn missing_file_fails() {
    huddle()
        .args(["preview", "-i", "/nonexistent/team.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load roster"));
}

#[test]
fn preview_lists_people() {
    huddle()
        .args(["preview", "-i", team_csv()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded Schedules (3 people)"))
        .stdout(predicate::str::contains("Tuesday    10:00-11:00;15:00-16:00"));
}

#[test]
fn times_lists_picker_options() {
    huddle()
        .arg("times")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("07:00\n07:30\n"))
        .stdout(predicate::str::ends_with("18:30\n"));
}
