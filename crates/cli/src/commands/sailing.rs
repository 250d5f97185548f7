// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sailing commands

use super::parse_sailing_id;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use ferry_core::{FerryConfig, SailingId};
use ferry_engine::{SailingReport, SailingSummary, Terminal};
use std::fmt::Write as _;

#[derive(Args)]
pub struct SailingArgs {
    #[command(subcommand)]
    pub command: SailingCommand,
}

#[derive(Subcommand)]
pub enum SailingCommand {
    /// Schedule a sailing; its ID is derived from terminal, day and hour
    Create {
        /// Vessel making the sailing
        #[arg(long)]
        vessel: String,
        /// Departure terminal name (first three letters form the ID)
        #[arg(long)]
        terminal: String,
        /// Day of month, 1-31
        #[arg(long)]
        day: u8,
        /// Hour of departure, 0-23
        #[arg(long)]
        hour: u8,
    },
    /// Remove a sailing with no reservations
    Delete {
        /// Sailing ID (TTT-DD-HH)
        #[arg(value_parser = parse_sailing_id)]
        id: SailingId,
    },
    /// Capacity report for every sailing, ordered by departure
    Report {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Show only this page (1-based)
        #[arg(long)]
        page: Option<usize>,
    },
}

pub fn handle(
    command: SailingCommand,
    terminal: &mut Terminal,
    config: &FerryConfig,
) -> Result<()> {
    match command {
        SailingCommand::Create {
            vessel,
            terminal: name,
            day,
            hour,
        } => {
            let id = terminal.create_sailing(&vessel, &name, day, hour)?;
            println!("Created sailing {}", id);
        }
        SailingCommand::Delete { id } => {
            terminal.delete_sailing(&id)?;
            println!("Deleted sailing {}", id);
        }
        SailingCommand::Report { json, page } => {
            let report = terminal.report()?;
            let page_size = config.report_page_size;
            let pages = select_pages(&report, page_size, page)?;
            if json {
                let rows: Vec<&SailingSummary> = pages.iter().flat_map(|&(_, p)| p.iter()).collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M");
                print!("{}", render_report(&report, &pages, page_size, &stamp.to_string()));
            }
        }
    }
    Ok(())
}

type Page<'a> = (usize, &'a [SailingSummary]);

/// All pages, or the single 1-based page asked for
fn select_pages(
    report: &SailingReport,
    page_size: usize,
    page: Option<usize>,
) -> Result<Vec<Page<'_>>> {
    let pages = report.pages(page_size).enumerate().map(|(i, p)| (i + 1, p));
    match page {
        None => Ok(pages.collect()),
        Some(n) => {
            let count = report.page_count(page_size);
            if n == 0 || n > count.max(1) {
                bail!("page {} out of range (report has {} page(s))", n, count.max(1));
            }
            Ok(pages.filter(|(i, _)| *i == n).collect())
        }
    }
}

const COLUMNS: &str =
    "SAILING    VESSEL                     LOW (m) HIGH (m) PEOPLE VEHICLES  LANES%   PAX%";

fn render_report(
    report: &SailingReport,
    pages: &[Page<'_>],
    page_size: usize,
    stamp: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sailing report  {}", stamp);
    if report.is_empty() {
        let _ = writeln!(out, "No sailings");
        return out;
    }
    let total = report.page_count(page_size);
    for (number, rows) in pages {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", COLUMNS);
        for row in rows.iter() {
            let _ = writeln!(out, "{}", render_row(row));
        }
        let _ = writeln!(out, "Page {} of {}", number, total);
    }
    out
}

fn render_row(row: &SailingSummary) -> String {
    format!(
        "{:<10} {:<25} {:>8.1} {:>8.1} {:>6} {:>8} {:>7} {:>6}",
        row.sailing_id.as_str(),
        row.vessel_id,
        row.low_remaining,
        row.high_remaining,
        row.people_on_board,
        row.vehicles_on_board,
        pct(row.lane_utilization_pct),
        pct(row.passenger_utilization_pct),
    )
}

fn pct(value: Option<f32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

#[cfg(test)]
#[path = "sailing_tests.rs"]
mod tests;
