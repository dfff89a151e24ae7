//! CLI integration tests for the plan command (no external tools needed)

use assert_cmd::Command;
use predicates::prelude::*;

const HIGHLIGHTS: &str = "\
Interesting_Moments:
1.
Title: Opening
Start_Time: 00:00:10
End_Time: 00:00:20
Why_Interesting: Strong start.

2.
Title: Closing
Start_Time: 00:01:00
End_Time: 00:01:30
Why_Interesting: Good payoff.
";

fn write_highlights(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("video_highlights.txt");
    std::fs::write(&path, HIGHLIGHTS).unwrap();
    path
}

#[test]
fn plan_prints_segments_for_valid_highlights() {
    let dir = tempfile::tempdir().unwrap();
    let highlights = write_highlights(&dir);

    Command::cargo_bin("reelcut")
        .unwrap()
        .args(["plan", "-H"])
        .arg(&highlights)
        .args(["--duration", "00:02:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 segment(s)"))
        .stdout(predicate::str::contains("Opening"));
}

#[test]
fn plan_json_output_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let highlights = write_highlights(&dir);

    let output = Command::cargo_bin("reelcut")
        .unwrap()
        .args(["plan", "-H"])
        .arg(&highlights)
        .args(["--duration", "00:02:00", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["plan"]["segments"].as_array().unwrap().len(), 2);
    assert_eq!(report["plan"]["segments"][0]["start"], 10.0);
    assert_eq!(report["plan"]["total_duration"], 40.0);
}

#[test]
fn plan_requires_duration_or_input() {
    let dir = tempfile::tempdir().unwrap();
    let highlights = write_highlights(&dir);

    Command::cargo_bin("reelcut")
        .unwrap()
        .args(["plan", "-H"])
        .arg(&highlights)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--duration or --input"));
}

#[test]
fn plan_reports_no_highlights_for_unstructured_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_highlights.txt");
    std::fs::write(&path, "Nothing interesting happened.").unwrap();

    Command::cargo_bin("reelcut")
        .unwrap()
        .args(["plan", "-H"])
        .arg(&path)
        .args(["--duration", "00:02:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No highlights found."));
}

#[test]
fn plan_rejects_malformed_duration() {
    let dir = tempfile::tempdir().unwrap();
    let highlights = write_highlights(&dir);

    Command::cargo_bin("reelcut")
        .unwrap()
        .args(["plan", "-H"])
        .arg(&highlights)
        .args(["--duration", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}
