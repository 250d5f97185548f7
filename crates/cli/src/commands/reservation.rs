// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reservation commands

use super::parse_sailing_id;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use ferry_core::{Reservation, SailingId};
use ferry_engine::{CheckIn, Terminal};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ReservationArgs {
    #[command(subcommand)]
    pub command: ReservationCommand,
}

#[derive(Subcommand)]
pub enum ReservationCommand {
    /// Reserve space for a vehicle on a sailing
    ///
    /// Pass --height and --length for a special (oversized) vehicle.
    Create {
        /// Sailing ID (TTT-DD-HH)
        #[arg(value_parser = parse_sailing_id)]
        sailing: SailingId,
        /// Vehicle license plate
        license: String,
        /// People travelling in the vehicle, driver included
        #[arg(long, default_value = "1")]
        occupants: u32,
        /// Contact phone number
        #[arg(long)]
        phone: String,
        /// Vehicle height in metres
        #[arg(long, requires = "length")]
        height: Option<f32>,
        /// Vehicle length in metres
        #[arg(long, requires = "height")]
        length: Option<f32>,
    },
    /// Cancel a reservation and return its space
    Cancel {
        #[arg(value_parser = parse_sailing_id)]
        sailing: SailingId,
        license: String,
    },
    /// Check a vehicle in and collect its fare
    CheckIn {
        #[arg(value_parser = parse_sailing_id)]
        sailing: SailingId,
        license: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List reservations on a sailing
    List {
        #[arg(value_parser = parse_sailing_id)]
        sailing: SailingId,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ReservationInfo {
    sailing_id: String,
    license: String,
    lane: String,
    fare: f32,
    occupants: u32,
    state: String,
}

impl From<&Reservation> for ReservationInfo {
    fn from(r: &Reservation) -> Self {
        Self {
            sailing_id: r.sailing_id.to_string(),
            license: r.vehicle_license.clone(),
            lane: r.lane().to_string(),
            fare: r.fare,
            occupants: r.people_occupants,
            state: r.state().to_string(),
        }
    }
}

impl fmt::Display for ReservationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:<5} {:>8.2} {:>9} {}",
            self.license, self.lane, self.fare, self.occupants, self.state
        )
    }
}

#[derive(Serialize)]
struct Receipt(CheckIn);

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checked in {} on {}: fare ${:.2}, {} aboard, {} lane",
            self.0.license, self.0.sailing_id, self.0.fare, self.0.people, self.0.lane
        )
    }
}

pub fn handle(command: ReservationCommand, terminal: &mut Terminal) -> Result<()> {
    match command {
        ReservationCommand::Create {
            sailing,
            license,
            occupants,
            phone,
            height,
            length,
        } => {
            let reservation = match (height, length) {
                (Some(height), Some(length)) => terminal.create_special_reservation(
                    &sailing, &license, occupants, &phone, height, length,
                )?,
                _ => terminal.create_reservation(&sailing, &license, occupants, &phone)?,
            };
            println!(
                "Reserved {} on {} in the {} lane, fare ${:.2}",
                reservation.vehicle_license,
                reservation.sailing_id,
                reservation.lane(),
                reservation.fare
            );
        }
        ReservationCommand::Cancel { sailing, license } => {
            terminal.cancel_reservation(&sailing, &license)?;
            println!("Cancelled reservation for {} on {}", license, sailing);
        }
        ReservationCommand::CheckIn {
            sailing,
            license,
            json,
        } => {
            let receipt = Receipt(terminal.check_in(&sailing, &license)?);
            output::print(&receipt, OutputFormat::from_json_flag(json))?;
        }
        ReservationCommand::List { sailing, json } => {
            let rows: Vec<ReservationInfo> = terminal
                .reservations_for_sailing(&sailing)?
                .iter()
                .map(ReservationInfo::from)
                .collect();
            output::print_list(
                &rows,
                &format!(
                    "{:<20} {:<5} {:>8} {:>9} STATE",
                    "LICENSE", "LANE", "FARE", "OCCUPANTS"
                ),
                "No reservations",
                OutputFormat::from_json_flag(json),
            )?;
        }
    }
    Ok(())
}
