//! Check-in specs
//!
//! Verify check-in reports the fare and commits occupancy exactly once.

use crate::prelude::*;

fn reserve(harbor: &Harbor, license: &str, occupants: &str) {
    harbor
        .ferry()
        .args(&[
            "reservation",
            "create",
            "WIN-24-15",
            license,
            "--occupants",
            occupants,
            "--phone",
            "555-0100",
        ])
        .passes();
}

#[test]
fn check_in_reports_fare_and_people() {
    let harbor = Harbor::with_sailing();
    reserve(&harbor, "ABC123", "2");

    harbor
        .ferry()
        .args(&["reservation", "check-in", "WIN-24-15", "ABC123"])
        .passes()
        .stdout_eq("Checked in ABC123 on WIN-24-15: fare $14.00, 2 aboard, low lane\n");
}

#[test]
fn check_in_json_receipt() {
    let harbor = Harbor::with_sailing();
    reserve(&harbor, "ABC123", "3");

    let run = harbor
        .ferry()
        .args(&["reservation", "check-in", "WIN-24-15", "ABC123", "--json"])
        .passes();

    let json = run.json();
    assert_eq!(json["fare"], 14.0);
    assert_eq!(json["people"], 3);
    assert_eq!(json["vehicle_length"], 7.0);
    assert_eq!(json["lane"], "low");
}

#[test]
fn second_check_in_is_refused() {
    let harbor = Harbor::with_sailing();
    reserve(&harbor, "ABC123", "2");
    harbor
        .ferry()
        .args(&["reservation", "check-in", "WIN-24-15", "ABC123"])
        .passes();

    harbor
        .ferry()
        .args(&["reservation", "check-in", "WIN-24-15", "ABC123"])
        .fails()
        .stderr_has("reservation not found")
        .stderr_has("only be checked in once");

    let report = harbor
        .ferry()
        .args(&["sailing", "report", "--json"])
        .passes();
    assert_eq!(report.json()[0]["people_on_board"], 2);
}

#[test]
fn checked_in_state_is_listed() {
    let harbor = Harbor::with_sailing();
    reserve(&harbor, "ABC123", "2");
    harbor
        .ferry()
        .args(&["reservation", "check-in", "WIN-24-15", "ABC123"])
        .passes();

    harbor
        .ferry()
        .args(&["reservation", "list", "WIN-24-15"])
        .passes()
        .stdout_has("checked-in");
}
