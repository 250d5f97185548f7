// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vessel commands

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use ferry_core::Vessel;
use ferry_engine::Terminal;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct VesselArgs {
    #[command(subcommand)]
    pub command: VesselCommand,
}

#[derive(Subcommand)]
pub enum VesselCommand {
    /// Register a new vessel
    Create {
        /// Vessel name (at most 25 characters)
        name: String,
        /// Maximum passengers on board
        #[arg(long)]
        passengers: u32,
        /// High-ceiling lane length in metres
        #[arg(long)]
        high_lane: f32,
        /// Low-ceiling lane length in metres
        #[arg(long)]
        low_lane: f32,
    },
    /// Remove a vessel with no scheduled sailings
    Delete {
        /// Vessel name
        name: String,
    },
    /// List registered vessels
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct VesselInfo {
    name: String,
    max_passengers: u32,
    high_lane_length: f32,
    low_lane_length: f32,
}

impl From<Vessel> for VesselInfo {
    fn from(v: Vessel) -> Self {
        Self {
            name: v.name,
            max_passengers: v.max_passengers,
            high_lane_length: v.high_lane_length,
            low_lane_length: v.low_lane_length,
        }
    }
}

impl fmt::Display for VesselInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<25} {:>10} {:>9.1} {:>9.1}",
            self.name, self.max_passengers, self.high_lane_length, self.low_lane_length
        )
    }
}

pub fn handle(command: VesselCommand, terminal: &mut Terminal) -> Result<()> {
    match command {
        VesselCommand::Create {
            name,
            passengers,
            high_lane,
            low_lane,
        } => {
            terminal.create_vessel(&Vessel::new(&name, passengers, high_lane, low_lane))?;
            println!("Created vessel {}", name);
        }
        VesselCommand::Delete { name } => {
            terminal.delete_vessel(&name)?;
            println!("Deleted vessel {}", name);
        }
        VesselCommand::List { json } => {
            let vessels: Vec<VesselInfo> = terminal
                .list_vessels()?
                .into_iter()
                .map(VesselInfo::from)
                .collect();
            output::print_list(
                &vessels,
                &format!(
                    "{:<25} {:>10} {:>9} {:>9}",
                    "NAME", "PASSENGERS", "HIGH (m)", "LOW (m)"
                ),
                "No vessels",
                OutputFormat::from_json_flag(json),
            )?;
        }
    }
    Ok(())
}
