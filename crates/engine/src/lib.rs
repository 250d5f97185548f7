// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Ferry capacity ledgers
//!
//! Sailings own lane and passenger capacity; reservations draw on it.
//! [`Terminal`] opens both over a data directory and enforces the rules
//! that span them.

mod directory;
mod error;
mod report;
mod reservation;
mod sailing;
mod terminal;

pub use directory::{VehicleDirectory, VehicleRegistry, VesselDirectory, VesselLookup};
pub use error::{ErrorKind, LedgerError};
pub use report::{SailingReport, SailingSummary};
pub use reservation::{CheckIn, ReservationLedger};
pub use sailing::SailingLedger;
pub use terminal::Terminal;
