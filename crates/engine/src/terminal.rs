// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal: the four ledgers wired together over one data directory
//!
//! Cross-ledger rules live here: a vessel with sailings cannot be deleted,
//! and neither can a sailing with reservations.

use crate::directory::{VehicleDirectory, VesselDirectory};
use crate::error::LedgerError;
use crate::report::SailingReport;
use crate::reservation::{CheckIn, ReservationLedger};
use crate::sailing::SailingLedger;
use ferry_core::{FerryConfig, Reservation, SailingId, Vessel};
use tracing::debug;

pub struct Terminal {
    pub sailings: SailingLedger<VesselDirectory>,
    pub reservations: ReservationLedger<VehicleDirectory>,
}

impl Terminal {
    /// Open (creating if needed) every data file named by `config`
    pub fn open(config: &FerryConfig) -> Result<Self, LedgerError> {
        let vessels = VesselDirectory::open(&config.vessels_path())?;
        let vehicles = VehicleDirectory::open(&config.vehicles_path())?;
        let sailings = SailingLedger::open(&config.sailings_path(), vessels)?;
        let reservations = ReservationLedger::open(&config.reservations_path(), vehicles)?;
        debug!(data_dir = %config.data_dir.display(), "terminal opened");
        Ok(Self {
            sailings,
            reservations,
        })
    }

    pub fn create_vessel(&mut self, vessel: &Vessel) -> Result<(), LedgerError> {
        self.sailings.vessels().create(vessel)
    }

    pub fn delete_vessel(&mut self, name: &str) -> Result<(), LedgerError> {
        if self.sailings.vessel_has_sailings(name)? {
            return Err(LedgerError::VesselInUse(name.to_string()));
        }
        self.sailings.vessels().delete(name)
    }

    pub fn list_vessels(&mut self) -> Result<Vec<Vessel>, LedgerError> {
        self.sailings.vessels().list()
    }

    pub fn create_sailing(
        &mut self,
        vessel_id: &str,
        terminal: &str,
        day: u8,
        hour: u8,
    ) -> Result<SailingId, LedgerError> {
        self.sailings.create_sailing(vessel_id, terminal, day, hour)
    }

    pub fn delete_sailing(&mut self, id: &SailingId) -> Result<(), LedgerError> {
        if !self.sailings.exists(id)? {
            return Err(LedgerError::SailingNotFound(id.clone()));
        }
        if self.reservations.has_reservations(id)? {
            return Err(LedgerError::SailingHasReservations(id.clone()));
        }
        self.sailings.delete_sailing(id)
    }

    pub fn create_reservation(
        &mut self,
        sailing_id: &SailingId,
        license: &str,
        occupants: u32,
        phone: &str,
    ) -> Result<Reservation, LedgerError> {
        self.reservations
            .create_reservation(&mut self.sailings, sailing_id, license, occupants, phone)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_special_reservation(
        &mut self,
        sailing_id: &SailingId,
        license: &str,
        occupants: u32,
        phone: &str,
        height: f32,
        length: f32,
    ) -> Result<Reservation, LedgerError> {
        self.reservations.create_special_reservation(
            &mut self.sailings,
            sailing_id,
            license,
            occupants,
            phone,
            height,
            length,
        )
    }

    pub fn cancel_reservation(
        &mut self,
        sailing_id: &SailingId,
        license: &str,
    ) -> Result<Reservation, LedgerError> {
        self.reservations
            .cancel_reservation(&mut self.sailings, sailing_id, license)
    }

    pub fn check_in(&mut self, sailing_id: &SailingId, license: &str) -> Result<CheckIn, LedgerError> {
        self.reservations
            .check_in(&mut self.sailings, sailing_id, license)
    }

    pub fn reservations_for_sailing(
        &mut self,
        sailing_id: &SailingId,
    ) -> Result<Vec<Reservation>, LedgerError> {
        if !self.sailings.exists(sailing_id)? {
            return Err(LedgerError::SailingNotFound(sailing_id.clone()));
        }
        self.reservations.reservations_for_sailing(sailing_id)
    }

    pub fn report(&mut self) -> Result<SailingReport, LedgerError> {
        self.sailings.report()
    }

    /// Close every store, even if an earlier one fails, and return the
    /// first error. Safe to call more than once.
    pub fn close(&mut self) -> Result<(), LedgerError> {
        let results = [
            self.reservations.close(),
            self.reservations.vehicles().close(),
            self.sailings.close(),
            self.sailings.vessels().close(),
        ];
        debug!("terminal closed");
        results.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
