//! Help and usage specs
//!
//! Verify the command tree is discoverable from --help.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn top_level_help_lists_command_groups() {
    Command::cargo_bin("ferry")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("vessel")
                .and(predicate::str::contains("sailing"))
                .and(predicate::str::contains("reservation")),
        );
}

#[test]
fn reservation_help_lists_check_in() {
    Command::cargo_bin("ferry")
        .unwrap()
        .args(["reservation", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("check-in"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    Command::cargo_bin("ferry")
        .unwrap()
        .arg("sailing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
