// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ferry-core: domain types for the ferry terminal ledger
//!
//! This crate provides:
//! - Vessels, vehicles, sailings and reservations as plain data
//! - Sailing ID derivation and parsing
//! - The tariff: lane buffer, nominal vehicle length and fare rates
//! - TOML configuration

pub mod config;
pub mod reservation;
pub mod sailing;
pub mod tariff;
pub mod vehicle;
pub mod vessel;

pub use config::{ConfigError, FerryConfig};
pub use reservation::{Reservation, ReservationState};
pub use sailing::{Lane, Sailing, SailingId, SailingIdError};
pub use vehicle::Vehicle;
pub use vessel::Vessel;
