// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn help_lists_commands() {
    reqlink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("check-config"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn schema_input_is_json() {
    let output = reqlink().args(["schema", "input"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "array");
}

#[test]
fn completions_for_bash() {
    reqlink()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reqlink"));
}

#[test]
fn check_config_reports_problems() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.toml", "[tracker]\nurl = \"https://acme.example.com\"\n");

    reqlink()
        .arg("check-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("problem: "))
        .stderr(predicate::str::contains("error: Jira configuration is incomplete"));
}

#[test]
fn check_config_accepts_complete_settings() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "config.toml",
        "[tracker]\nurl = \"https://acme.atlassian.net\"\nusername = \"qa\"\nproject_key = \"QA\"\n",
    );

    reqlink()
        .arg("check-config")
        .arg("--config")
        .arg(&config)
        .env("REQLINK_API_TOKEN", "from-env")
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration ok"))
        .stdout(predicate::str::contains("from-env").not());
}

#[test]
fn missing_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    reqlink()
        .arg("check-config")
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings file not found"));
}

#[test]
fn preview_renders_without_network() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.toml", "[tracker]\nproject_key = \"QA\"\n");
    let input = write(&dir, "reqs.json", TWO_CASES);

    reqlink()
        .arg("preview")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] REQ-INT-001: Validate login (Task)"))
        .stdout(predicate::str::contains("3 issues would be created"));
}

#[test]
fn export_refuses_incomplete_config() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.toml", "");
    let input = write(&dir, "reqs.json", TWO_CASES);

    reqlink()
        .arg("export")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: Jira configuration is incomplete"));
}

#[test]
fn export_rejects_malformed_input() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.toml", "");
    let input = write(&dir, "reqs.json", "{ not json");

    reqlink()
        .arg("export")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: "));
}
