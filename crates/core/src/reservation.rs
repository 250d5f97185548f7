// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reservations
//!
//! A reservation holds lane space on one sailing for one vehicle. It starts
//! out `Created`, becomes `CheckedIn` when the vehicle arrives, and is
//! removed entirely on cancellation.

use crate::sailing::{Lane, SailingId};
use crate::tariff::STANDARD_VEHICLE_LENGTH;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a stored reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationState {
    Created,
    CheckedIn,
}

impl std::fmt::Display for ReservationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationState::Created => write!(f, "created"),
            ReservationState::CheckedIn => write!(f, "checked-in"),
        }
    }
}

/// A vehicle booking on a sailing, keyed by `(sailing_id, vehicle_license)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub sailing_id: SailingId,
    pub vehicle_license: String,
    pub fare: f32,
    pub people_occupants: u32,
    /// 0 together with a 0 length marks a standard vehicle
    pub vehicle_height: f32,
    pub vehicle_length: f32,
    pub used_high_lane: bool,
    pub checked_in: bool,
}

impl Reservation {
    pub fn is_standard(&self) -> bool {
        self.vehicle_height == 0.0 && self.vehicle_length == 0.0
    }

    /// Length the sailing was charged for, excluding the lane buffer
    pub fn booked_length(&self) -> f32 {
        if self.is_standard() {
            STANDARD_VEHICLE_LENGTH
        } else {
            self.vehicle_length
        }
    }

    /// Lane that absorbed this vehicle at creation
    pub fn lane(&self) -> Lane {
        if self.used_high_lane {
            Lane::High
        } else {
            Lane::Low
        }
    }

    pub fn state(&self) -> ReservationState {
        if self.checked_in {
            ReservationState::CheckedIn
        } else {
            ReservationState::Created
        }
    }

    /// Whether this reservation belongs to the given natural key
    pub fn matches(&self, sailing_id: &SailingId, license: &str) -> bool {
        &self.sailing_id == sailing_id && self.vehicle_license == license
    }
}
