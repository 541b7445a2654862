//! Tests for the traindown binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write log");
    file
}

#[test]
fn prints_session_as_json() {
    let file = log_file("@ 2023-01-15\nSquat:\n  100kg 5r 3s\n");

    let output = Command::cargo_bin("traindown")
        .unwrap()
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["movements"][0]["name"], "Squat");
    assert_eq!(json["movements"][0]["performances"][0]["sets"], 3);
}

#[test]
fn prints_session_as_yaml() {
    let file = log_file("Squat:\n  100\n");

    Command::cargo_bin("traindown")
        .unwrap()
        .arg(file.path())
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Squat"));
}

#[test]
fn reads_from_stdin() {
    Command::cargo_bin("traindown")
        .unwrap()
        .arg("-")
        .write_stdin("Bench:\n  80 5r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Bench\""));
}

#[test]
fn lists_tokens() {
    let file = log_file("Squat:\n  100 5r\n");

    Command::cargo_bin("traindown")
        .unwrap()
        .arg(file.path())
        .arg("--tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tMOVEMENT\tSquat"))
        .stdout(predicate::str::contains("2\tREPS\t5"));
}

#[test]
fn fails_on_untokenizable_input() {
    let file = log_file("Squat:\n  this is not a set\n");

    Command::cargo_bin("traindown")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized line"));
}

#[test]
fn honors_config_file_markers() {
    let config = {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[scanner]\nnote_marker = \"!\"").unwrap();
        file
    };
    let file = log_file("Squat:\n  ! felt strong\n  100\n");

    Command::cargo_bin("traindown")
        .unwrap()
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("felt strong"));
}

#[test]
fn rejects_invalid_marker_config() {
    let config = {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[scanner]\nnote_marker = \"#\"").unwrap();
        file
    };
    let file = log_file("Squat:\n  100\n");

    Command::cargo_bin("traindown")
        .unwrap()
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to build scanner"));
}
