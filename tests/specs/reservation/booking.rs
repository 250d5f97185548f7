//! Reservation booking specs
//!
//! Verify lane choice, fares and cancellation for standard and special
//! vehicles.

use crate::prelude::*;

fn reserve(harbor: &Harbor, license: &str, extra: &[&str]) -> CliBuilder {
    let mut args = vec![
        "reservation",
        "create",
        "WIN-24-15",
        license,
        "--phone",
        "555-0100",
    ];
    args.extend_from_slice(extra);
    harbor.ferry().args(&args)
}

#[test]
fn standard_vehicle_pays_flat_fare_in_low_lane() {
    let harbor = Harbor::with_sailing();

    reserve(&harbor, "ABC123", &["--occupants", "2"])
        .passes()
        .stdout_eq("Reserved ABC123 on WIN-24-15 in the low lane, fare $14.00\n");
}

#[test]
fn tall_vehicle_goes_to_high_lane_and_pays_per_metre() {
    let harbor = Harbor::with_sailing();

    reserve(&harbor, "TRUCK1", &["--height", "2.5", "--length", "10"])
        .passes()
        .stdout_has("high lane")
        .stdout_has("$30.00");
}

#[test]
fn height_without_length_is_a_usage_error() {
    let harbor = Harbor::with_sailing();

    reserve(&harbor, "TRUCK1", &["--height", "2.5"])
        .fails()
        .stderr_has("--length");
}

#[test]
fn vehicle_too_long_for_any_lane_is_refused() {
    let harbor = Harbor::with_sailing();

    reserve(&harbor, "TRUCK1", &["--height", "2.5", "--length", "25"])
        .fails()
        .stderr_has("no lane with room")
        .stderr_has("try another sailing");
}

#[test]
fn second_booking_for_same_vehicle_is_refused() {
    let harbor = Harbor::with_sailing();
    reserve(&harbor, "ABC123", &[]).passes();

    reserve(&harbor, "ABC123", &[])
        .fails()
        .stderr_has("already has a reservation on WIN-24-15");
}

#[test]
fn booking_on_unknown_sailing_is_not_found() {
    let harbor = Harbor::with_sailing();

    harbor
        .ferry()
        .args(&[
            "reservation",
            "create",
            "NAN-01-01",
            "ABC123",
            "--phone",
            "555-0100",
        ])
        .fails()
        .stderr_has("sailing not found: NAN-01-01");
}

#[test]
fn cancel_returns_lane_space() {
    let harbor = Harbor::with_sailing();
    reserve(&harbor, "ABC123", &[]).passes();

    harbor
        .ferry()
        .args(&["reservation", "cancel", "WIN-24-15", "ABC123"])
        .passes()
        .stdout_eq("Cancelled reservation for ABC123 on WIN-24-15\n");

    let report = harbor
        .ferry()
        .args(&["sailing", "report", "--json"])
        .passes();
    assert_eq!(report.json()[0]["low_remaining"], 50.0);

    harbor
        .ferry()
        .args(&["reservation", "cancel", "WIN-24-15", "ABC123"])
        .fails()
        .stderr_has("reservation not found");
}

#[test]
fn list_shows_reservations_in_booking_order() {
    let harbor = Harbor::with_sailing();
    reserve(&harbor, "ABC123", &[]).passes();
    reserve(&harbor, "TRUCK1", &["--height", "2.5", "--length", "10"]).passes();

    let run = harbor
        .ferry()
        .args(&["reservation", "list", "WIN-24-15", "--json"])
        .passes();

    let json = run.json();
    assert_eq!(json[0]["license"], "ABC123");
    assert_eq!(json[0]["lane"], "low");
    assert_eq!(json[1]["license"], "TRUCK1");
    assert_eq!(json[1]["lane"], "high");
    assert_eq!(json[1]["state"], "created");
}

#[test]
fn empty_sailing_lists_no_reservations() {
    let harbor = Harbor::with_sailing();

    harbor
        .ferry()
        .args(&["reservation", "list", "WIN-24-15"])
        .passes()
        .stdout_eq("No reservations\n");
}
