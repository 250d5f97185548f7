//! Sailing lifecycle specs
//!
//! Verify sailing ID derivation and the delete guards.

use crate::prelude::*;

#[test]
fn sailing_id_is_derived_from_terminal_day_and_hour() {
    let harbor = Harbor::with_sailing();

    harbor
        .ferry()
        .args(&[
            "sailing",
            "create",
            "--vessel",
            "Spirit",
            "--terminal",
            "nanaimo",
            "--day",
            "3",
            "--hour",
            "8",
        ])
        .passes()
        .stdout_eq("Created sailing NAN-03-08\n");
}

#[test]
fn duplicate_departure_fails() {
    let harbor = Harbor::with_sailing();

    harbor
        .ferry()
        .args(&[
            "sailing",
            "create",
            "--vessel",
            "Spirit",
            "--terminal",
            "Windsor",
            "--day",
            "24",
            "--hour",
            "15",
        ])
        .fails()
        .stderr_has("sailing already exists: WIN-24-15");
}

#[test]
fn sailing_on_unknown_vessel_fails() {
    let harbor = Harbor::empty();

    harbor
        .ferry()
        .args(&[
            "sailing",
            "create",
            "--vessel",
            "Ghost",
            "--terminal",
            "Winnipeg",
            "--day",
            "24",
            "--hour",
            "15",
        ])
        .fails()
        .stderr_has("vessel not found: Ghost");
}

#[test]
fn out_of_range_hour_fails() {
    let harbor = Harbor::with_sailing();

    harbor
        .ferry()
        .args(&[
            "sailing",
            "create",
            "--vessel",
            "Spirit",
            "--terminal",
            "Winnipeg",
            "--day",
            "24",
            "--hour",
            "24",
        ])
        .fails()
        .stderr_has("hour must be 0-23");
}

#[test]
fn sailing_with_reservation_cannot_be_deleted() {
    let harbor = Harbor::with_sailing();
    harbor
        .ferry()
        .args(&[
            "reservation",
            "create",
            "WIN-24-15",
            "ABC123",
            "--phone",
            "555-0100",
        ])
        .passes();

    harbor
        .ferry()
        .args(&["sailing", "delete", "WIN-24-15"])
        .fails()
        .stderr_has("still has reservations");

    harbor
        .ferry()
        .args(&["reservation", "cancel", "WIN-24-15", "ABC123"])
        .passes();
    harbor
        .ferry()
        .args(&["sailing", "delete", "WIN-24-15"])
        .passes()
        .stdout_eq("Deleted sailing WIN-24-15\n");
}
