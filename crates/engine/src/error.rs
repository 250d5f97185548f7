// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the ledgers

use ferry_core::{SailingId, SailingIdError};
use ferry_storage::StorageError;
use thiserror::Error;

/// Coarse classification of a ledger failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A sailing, reservation, vessel or vehicle key is absent
    NotFound,
    /// A people or lane-length check failed
    CapacityExceeded,
    /// A key already exists
    DuplicateKey,
    /// The record is still referenced by other records
    InUse,
    /// The request itself is malformed
    InvalidInput,
    /// The backing file failed
    Storage,
}

/// Errors that can occur in ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("sailing not found: {0}")]
    SailingNotFound(SailingId),
    #[error("reservation not found: {license} on {sailing_id}")]
    ReservationNotFound {
        sailing_id: SailingId,
        license: String,
    },
    #[error("vessel not found: {0}")]
    VesselNotFound(String),
    #[error("vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("sailing already exists: {0}")]
    DuplicateSailing(SailingId),
    #[error("vehicle {license} already has a reservation on {sailing_id}")]
    DuplicateReservation {
        sailing_id: SailingId,
        license: String,
    },
    #[error("vessel already exists: {0}")]
    DuplicateVessel(String),
    #[error("vehicle already registered: {0}")]
    DuplicateVehicle(String),

    #[error("sailing {0} has no vehicle space left")]
    NoVehicleCapacity(SailingId),
    #[error("sailing {sailing_id} cannot take {requested} more people ({available} seats left)")]
    NoPeopleCapacity {
        sailing_id: SailingId,
        requested: u32,
        available: u32,
    },
    #[error("sailing {sailing_id} has no lane with room for a {length}m vehicle")]
    NoLaneSpace { sailing_id: SailingId, length: f32 },

    #[error("sailing {0} still has reservations")]
    SailingHasReservations(SailingId),
    #[error("vessel {0} still has sailings")]
    VesselInUse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid sailing ID: {0}")]
    InvalidSailingId(#[from] SailingIdError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::SailingNotFound(_)
            | LedgerError::ReservationNotFound { .. }
            | LedgerError::VesselNotFound(_)
            | LedgerError::VehicleNotFound(_) => ErrorKind::NotFound,
            LedgerError::DuplicateSailing(_)
            | LedgerError::DuplicateReservation { .. }
            | LedgerError::DuplicateVessel(_)
            | LedgerError::DuplicateVehicle(_) => ErrorKind::DuplicateKey,
            LedgerError::NoVehicleCapacity(_)
            | LedgerError::NoPeopleCapacity { .. }
            | LedgerError::NoLaneSpace { .. } => ErrorKind::CapacityExceeded,
            LedgerError::SailingHasReservations(_) | LedgerError::VesselInUse(_) => {
                ErrorKind::InUse
            }
            LedgerError::InvalidInput(_) | LedgerError::InvalidSailingId(_) => {
                ErrorKind::InvalidInput
            }
            LedgerError::Storage(StorageError::FieldTooLong { .. }) => ErrorKind::InvalidInput,
            LedgerError::Storage(_) => ErrorKind::Storage,
        }
    }
}
