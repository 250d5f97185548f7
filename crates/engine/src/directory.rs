// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vessel and vehicle directories
//!
//! Plain unique-key registries over a record store. The ledgers only see
//! them through [`VesselLookup`] and [`VehicleRegistry`].

use crate::error::LedgerError;
use ferry_core::{Vehicle, Vessel};
use ferry_storage::RecordStore;
use std::path::Path;
use tracing::info;

/// Read access to vessel definitions
pub trait VesselLookup {
    /// Fetch a vessel, failing with `VesselNotFound` if it is unknown
    fn get(&mut self, name: &str) -> Result<Vessel, LedgerError>;
}

/// Lazy vehicle registration used by the reservation ledger
pub trait VehicleRegistry {
    fn exists(&mut self, license: &str) -> Result<bool, LedgerError>;
    fn register(&mut self, vehicle: &Vehicle) -> Result<(), LedgerError>;
}

/// Registered vessels, keyed by name
pub struct VesselDirectory {
    store: RecordStore<Vessel>,
}

impl VesselDirectory {
    pub fn new(store: RecordStore<Vessel>) -> Self {
        Self { store }
    }

    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        Ok(Self::new(RecordStore::open(path)?))
    }

    /// Register a new vessel
    pub fn create(&mut self, vessel: &Vessel) -> Result<(), LedgerError> {
        vessel.validate().map_err(LedgerError::InvalidInput)?;
        if self.exists(&vessel.name)? {
            return Err(LedgerError::DuplicateVessel(vessel.name.clone()));
        }
        self.store.append(vessel)?;
        info!(vessel = %vessel.name, max_passengers = vessel.max_passengers, "vessel created");
        Ok(())
    }

    pub fn exists(&mut self, name: &str) -> Result<bool, LedgerError> {
        Ok(self.store.find_first(|v| v.name == name)?.is_some())
    }

    /// Remove a vessel. Callers are responsible for checking it has no sailings.
    pub fn delete(&mut self, name: &str) -> Result<(), LedgerError> {
        if self.store.delete_where(|v| v.name == name)? == 0 {
            return Err(LedgerError::VesselNotFound(name.to_string()));
        }
        info!(vessel = name, "vessel deleted");
        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Vessel>, LedgerError> {
        Ok(self.store.records()?)
    }

    pub fn close(&mut self) -> Result<(), LedgerError> {
        Ok(self.store.close()?)
    }
}

impl VesselLookup for VesselDirectory {
    fn get(&mut self, name: &str) -> Result<Vessel, LedgerError> {
        self.store
            .find_first(|v| v.name == name)?
            .map(|located| located.record)
            .ok_or_else(|| LedgerError::VesselNotFound(name.to_string()))
    }
}

/// Registered vehicles, keyed by license
pub struct VehicleDirectory {
    store: RecordStore<Vehicle>,
}

impl VehicleDirectory {
    pub fn new(store: RecordStore<Vehicle>) -> Self {
        Self { store }
    }

    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        Ok(Self::new(RecordStore::open(path)?))
    }

    pub fn get(&mut self, license: &str) -> Result<Vehicle, LedgerError> {
        self.store
            .find_first(|v| v.license == license)?
            .map(|located| located.record)
            .ok_or_else(|| LedgerError::VehicleNotFound(license.to_string()))
    }

    pub fn close(&mut self) -> Result<(), LedgerError> {
        Ok(self.store.close()?)
    }
}

impl VehicleRegistry for VehicleDirectory {
    fn exists(&mut self, license: &str) -> Result<bool, LedgerError> {
        Ok(self.store.find_first(|v| v.license == license)?.is_some())
    }

    fn register(&mut self, vehicle: &Vehicle) -> Result<(), LedgerError> {
        if vehicle.license.is_empty() {
            return Err(LedgerError::InvalidInput(
                "vehicle license must not be empty".to_string(),
            ));
        }
        if self.exists(&vehicle.license)? {
            return Err(LedgerError::DuplicateVehicle(vehicle.license.clone()));
        }
        self.store.append(vehicle)?;
        info!(license = %vehicle.license, special = vehicle.is_special, "vehicle registered");
        Ok(())
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
