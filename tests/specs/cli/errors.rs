//! Error reporting specs
//!
//! Verify failures exit non-zero with an `error:` line and suggestions.

use crate::prelude::*;

#[test]
fn malformed_sailing_id_is_rejected_by_parser() {
    let harbor = Harbor::empty();

    harbor
        .ferry()
        .args(&["sailing", "delete", "not-an-id"])
        .fails()
        .stderr_has("expected TTT-DD-HH");
}

#[test]
fn unknown_sailing_suggests_report() {
    let harbor = Harbor::empty();

    harbor
        .ferry()
        .args(&["sailing", "delete", "GHO-01-01"])
        .fails()
        .stderr_has("error: sailing not found: GHO-01-01")
        .stderr_has("ferry sailing report");
}

#[test]
fn config_file_supplies_data_dir_and_page_size() {
    let harbor = Harbor::empty();
    let data = harbor.path().join("from-config");
    harbor.file(
        "ferry.toml",
        &format!(
            "data_dir = {:?}\nreport_page_size = 1\n",
            data.display().to_string()
        ),
    );
    let config = harbor.path().join("ferry.toml").display().to_string();

    harbor
        .ferry_bare()
        .args(&[
            "--config",
            &config,
            "vessel",
            "create",
            "Spirit",
            "--passengers",
            "10",
            "--high-lane",
            "10",
            "--low-lane",
            "10",
        ])
        .passes();

    assert!(data.join("vessels.dat").exists());
}

#[test]
fn unknown_config_key_is_an_error() {
    let harbor = Harbor::empty();
    harbor.file("ferry.toml", "colour = \"blue\"\n");
    let config = harbor.path().join("ferry.toml").display().to_string();

    harbor
        .ferry_bare()
        .args(&["--config", &config, "vessel", "list"])
        .fails()
        .stderr_has("invalid config");
}
