//! Sailing report specs
//!
//! Verify ordering, capacity figures and pagination of the report.

use crate::prelude::*;

fn add_sailing(harbor: &Harbor, terminal: &str, day: &str, hour: &str) {
    harbor
        .ferry()
        .args(&[
            "sailing",
            "create",
            "--vessel",
            "Spirit",
            "--terminal",
            terminal,
            "--day",
            day,
            "--hour",
            hour,
        ])
        .passes();
}

#[test]
fn empty_report_says_no_sailings() {
    let harbor = Harbor::empty();

    harbor
        .ferry()
        .args(&["sailing", "report"])
        .passes()
        .stdout_has("Sailing report")
        .stdout_has("No sailings");
}

#[test]
fn report_is_ordered_by_departure() {
    let harbor = Harbor::with_sailing();
    add_sailing(&harbor, "Nanaimo", "3", "8");
    add_sailing(&harbor, "Tsawwassen", "24", "7");

    let run = harbor
        .ferry()
        .args(&["sailing", "report", "--json"])
        .passes();

    let ids: Vec<String> = run
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["sailing_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["NAN-03-08", "TSA-24-07", "WIN-24-15"]);
}

#[test]
fn report_reflects_reservations_and_check_in() {
    let harbor = Harbor::with_sailing();
    harbor
        .ferry()
        .args(&[
            "reservation",
            "create",
            "WIN-24-15",
            "ABC123",
            "--occupants",
            "2",
            "--phone",
            "555-0100",
        ])
        .passes();
    harbor
        .ferry()
        .args(&["reservation", "check-in", "WIN-24-15", "ABC123"])
        .passes();

    let run = harbor
        .ferry()
        .args(&["sailing", "report", "--json"])
        .passes();

    let line = &run.json()[0];
    assert_eq!(line["low_remaining"], 42.5);
    assert_eq!(line["high_remaining"], 20.0);
    assert_eq!(line["people_on_board"], 2);
    assert_eq!(line["vehicles_on_board"], 1);
    assert_eq!(line["passenger_utilization_pct"], 2.0);
}

#[test]
fn report_pages_five_sailings_at_a_time() {
    let harbor = Harbor::with_sailing();
    for day in 1..=6 {
        add_sailing(&harbor, "Nanaimo", &day.to_string(), "9");
    }

    harbor
        .ferry()
        .args(&["sailing", "report"])
        .passes()
        .stdout_has("Page 1 of 2")
        .stdout_has("Page 2 of 2");

    harbor
        .ferry()
        .args(&["sailing", "report", "--page", "2"])
        .passes()
        .stdout_has("WIN-24-15")
        .stdout_has("NAN-06-09")
        .stdout_lacks("NAN-01-09");
}

#[test]
fn page_past_the_end_fails() {
    let harbor = Harbor::with_sailing();

    harbor
        .ferry()
        .args(&["sailing", "report", "--page", "2"])
        .fails()
        .stderr_has("out of range");
}
