// Integration tests for the crs CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the crs binary.
fn crs() -> Command {
    Command::cargo_bin("crs").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    crs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crs"));
}

#[test]
fn cli_help_flag() {
    crs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Comprehensive Ranking System"));
}

#[test]
fn score_requires_profile() {
    crs()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn project_rejects_malformed_today() {
    crs()
        .args(["project", "profile.toml", "--today", "next tuesday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--today"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    crs()
        .args(["-q", "-v", "tables"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn tables_prints_point_tables() {
    crs()
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("# CRS Point Tables"))
        .stdout(predicate::str::contains("| 20-29 | 110 | 100 |"));
}
