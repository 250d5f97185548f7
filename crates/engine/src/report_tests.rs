// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn vessel() -> Vessel {
    Vessel::new("V1", 100, 20.0, 50.0)
}

fn summary(id: &str) -> SailingSummary {
    SailingSummary::new(Sailing::new(SailingId::from(id), &vessel()), Some(&vessel()))
}

#[test]
fn summaries_sort_by_day_then_hour() {
    let report = SailingReport::new(vec![
        summary("WIN-24-15"),
        summary("NAN-03-22"),
        summary("TSA-24-07"),
        summary("ABC-03-22"),
    ]);

    let ids: Vec<_> = report
        .summaries()
        .iter()
        .map(|s| s.sailing_id.as_str())
        .collect();
    assert_eq!(ids, vec!["ABC-03-22", "NAN-03-22", "TSA-24-07", "WIN-24-15"]);
}

#[test]
fn malformed_ids_sort_last() {
    let report = SailingReport::new(vec![summary("legacy"), summary("WIN-24-15")]);

    assert_eq!(report.summaries()[0].sailing_id.as_str(), "WIN-24-15");
    assert_eq!(report.summaries()[1].day, None);
}

#[test]
fn utilization_is_relative_to_vessel() {
    let mut sailing = Sailing::new(SailingId::from("WIN-24-15"), &vessel());
    sailing.low_remaining = 42.5;
    sailing.high_remaining = 13.0;
    sailing.people_on_board = 25;

    let line = SailingSummary::new(sailing, Some(&vessel()));

    // (70 - 55.5) / 70
    let lane = line.lane_utilization_pct.unwrap();
    assert!((lane - 20.714_285).abs() < 1e-3);
    assert_eq!(line.passenger_utilization_pct, Some(25.0));
}

#[test]
fn unknown_vessel_has_no_percentages() {
    let sailing = Sailing::new(SailingId::from("WIN-24-15"), &vessel());
    let line = SailingSummary::new(sailing, None);

    assert_eq!(line.lane_utilization_pct, None);
    assert_eq!(line.passenger_utilization_pct, None);
    assert_eq!(line.day, Some(24));
    assert_eq!(line.hour, Some(15));
}

#[parameterized(
    empty = { 0, 5, 0 },
    exact_page = { 5, 5, 1 },
    spill_over = { 6, 5, 2 },
    one_per_page = { 3, 1, 3 },
    zero_page_size_treated_as_one = { 2, 0, 2 },
)]
fn pages_split_report(sailings: usize, page_size: usize, expected_pages: usize) {
    let report = SailingReport::new(
        (0..sailings)
            .map(|i| summary(&format!("WIN-{:02}-10", i + 1)))
            .collect(),
    );

    assert_eq!(report.pages(page_size).count(), expected_pages);
    assert_eq!(report.page_count(page_size), expected_pages);
}

#[test]
fn pages_are_restartable() {
    let report = SailingReport::new(vec![summary("WIN-01-10"), summary("WIN-02-10")]);

    let first: Vec<_> = report.pages(1).map(|page| page.len()).collect();
    let second: Vec<_> = report.pages(1).map(|page| page.len()).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![1, 1]);
}
