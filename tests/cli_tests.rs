//! Integration tests for the one-shot CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn envman() -> Command {
    Command::cargo_bin("envman").unwrap()
}

#[test]
fn test_list_shows_all_variables() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "API_KEY=secret\nDB_HOST=localhost\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API_KEY=secret"))
        .stdout(predicate::str::contains("DB_HOST=localhost"));
}

#[test]
fn test_list_empty_file() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No environment variables found."));
}

#[test]
fn test_list_skips_comments_and_blanks() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "# header\n\nA=1\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A=1"))
        .stdout(predicate::str::contains("header").not());
}

#[test]
fn test_get_prints_raw_value() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "URL=https://example.com?a=b\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "get", "URL"])
        .assert()
        .success()
        .stdout("https://example.com?a=b\n");
}

#[test]
fn test_get_missing_key_fails() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "A=1\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "get", "MISSING"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key 'MISSING' not found"));
}

#[test]
fn test_set_creates_file() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");

    envman()
        .args(["--file", env_file.to_str().unwrap(), "set", "A=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: A=1"));

    assert_eq!(fs::read_to_string(&env_file).unwrap(), "A=1\n");
}

#[test]
fn test_set_appends_in_order() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");

    for def in ["A=1", "B=2"] {
        envman()
            .args(["--file", env_file.to_str().unwrap(), "set", def])
            .assert()
            .success();
    }

    assert_eq!(fs::read_to_string(&env_file).unwrap(), "A=1\nB=2\n");
}

#[test]
fn test_set_updates_existing_in_place() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "A=1\nB=2\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "set", "A=9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: A=9"));

    assert_eq!(fs::read_to_string(&env_file).unwrap(), "A=9\nB=2\n");
}

#[test]
fn test_set_value_may_contain_equals() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");

    envman()
        .args(["--file", env_file.to_str().unwrap(), "set", "URL=http://x?a=b"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&env_file).unwrap(),
        "URL=http://x?a=b\n"
    );
}

#[test]
fn test_set_rejects_bare_name() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");

    envman()
        .args(["--file", env_file.to_str().unwrap(), "set", "JUSTANAME"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME=VALUE"));
}

#[test]
fn test_unset_with_yes_removes_entry() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "A=1\nB=2\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "unset", "A", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: A"));

    assert_eq!(fs::read_to_string(&env_file).unwrap(), "B=2\n");
}

#[test]
fn test_unset_sole_entry_leaves_empty_file() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "A=1\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "unset", "A", "-y"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&env_file).unwrap(), "");
}

#[test]
fn test_unset_missing_key_fails() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "A=1\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "unset", "MISSING", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_file_reports_line_number() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "A=1\nBROKEN LINE\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed line 2"));
}

#[test]
fn test_rm_alias() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "A=1\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "rm", "A", "-y"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&env_file).unwrap(), "");
}

#[test]
fn test_ls_alias() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "A=1\n").unwrap();

    envman()
        .args(["--file", env_file.to_str().unwrap(), "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A=1"));
}
