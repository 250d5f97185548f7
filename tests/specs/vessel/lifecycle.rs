//! Vessel lifecycle specs
//!
//! Verify create, list and delete, and the guard against deleting a
//! vessel that still has sailings.

use crate::prelude::*;

fn create(harbor: &Harbor, name: &str) -> RunAssert {
    harbor
        .ferry()
        .args(&[
            "vessel",
            "create",
            name,
            "--passengers",
            "100",
            "--high-lane",
            "20",
            "--low-lane",
            "50",
        ])
        .passes()
}

#[test]
fn empty_directory_lists_no_vessels() {
    let harbor = Harbor::empty();

    harbor
        .ferry()
        .args(&["vessel", "list"])
        .passes()
        .stdout_eq("No vessels\n");
}

#[test]
fn created_vessel_is_listed() {
    let harbor = Harbor::empty();
    create(&harbor, "Spirit").stdout_has("Created vessel Spirit");

    let run = harbor.ferry().args(&["vessel", "list", "--json"]).passes();

    let json = run.json();
    assert_eq!(json[0]["name"], "Spirit");
    assert_eq!(json[0]["max_passengers"], 100);
}

#[test]
fn duplicate_vessel_fails() {
    let harbor = Harbor::empty();
    create(&harbor, "Spirit");

    harbor
        .ferry()
        .args(&[
            "vessel",
            "create",
            "Spirit",
            "--passengers",
            "1",
            "--high-lane",
            "1",
            "--low-lane",
            "1",
        ])
        .fails()
        .stderr_has("vessel already exists: Spirit");
}

#[test]
fn over_long_vessel_name_fails() {
    let harbor = Harbor::empty();

    harbor
        .ferry()
        .args(&[
            "vessel",
            "create",
            "A Vessel Name Far Too Long To Store",
            "--passengers",
            "10",
            "--high-lane",
            "10",
            "--low-lane",
            "10",
        ])
        .fails()
        .stderr_has("error:");
}

#[test]
fn vessel_with_sailing_cannot_be_deleted() {
    let harbor = Harbor::with_sailing();

    harbor
        .ferry()
        .args(&["vessel", "delete", "Spirit"])
        .fails()
        .stderr_has("still has sailings");

    harbor
        .ferry()
        .args(&["sailing", "delete", "WIN-24-15"])
        .passes();
    harbor
        .ferry()
        .args(&["vessel", "delete", "Spirit"])
        .passes()
        .stdout_has("Deleted vessel Spirit");
    harbor
        .ferry()
        .args(&["vessel", "list"])
        .passes()
        .stdout_lacks("Spirit");
}
