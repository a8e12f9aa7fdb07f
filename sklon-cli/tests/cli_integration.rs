//! Integration tests for the sklon CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_decline_single_record() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("decline").arg("5:ordinal");

    cmd.assert().success().stdout(predicate::str::contains("пятый"));
}

#[test]
fn test_decline_preserves_record_order() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("decline").arg("1").arg("2").arg("3");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("один\nдва\nтри\n"));
}

#[test]
fn test_decline_gender_and_all_forms() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("decline").arg("5:ordinal:жр:all");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("пятая:пятой:пятой:пятую:пятой:пятой"));
}

#[test]
fn test_decline_noun_agreement() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("decline").arg("12|рубль");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("двенадцать рублей"));
}

#[test]
fn test_decline_reports_failure_token() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("decline").arg("abc").arg("5:ordinal");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("error\nпятый\n"));
}

#[test]
fn test_decline_json_output() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("decline").arg("-f").arg("json").arg("5:ordinal");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"record\": \"5:ordinal\""))
        .stdout(predicate::str::contains("\"result\": \"пятый\""));
}

#[test]
fn test_list_cases() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("list").arg("cases");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("им"))
        .stdout(predicate::str::contains("Prepositional"));
}

#[test]
fn test_list_currencies() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("list").arg("currencies");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("рубль"))
        .stdout(predicate::str::contains("юань"));
}

#[test]
fn test_serve_rejects_missing_config() {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("serve").arg("--config").arg("/nonexistent/sklon.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_serve_rejects_malformed_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = \"not a number\"").unwrap();

    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.arg("serve").arg("--config").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
