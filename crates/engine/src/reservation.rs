// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reservation ledger
//!
//! Owns the reservation lifecycle:
//!
//! ```text
//! create ──▶ Created ──check_in──▶ CheckedIn
//!               │                     │
//!               └──────cancel─────────┴──▶ (record removed)
//! ```
//!
//! Capacity lives in the [`SailingLedger`], which is passed into each
//! operation. A reservation's lane is fixed at creation and cancellation
//! always releases exactly that lane.

use crate::directory::{VehicleDirectory, VehicleRegistry, VesselLookup};
use crate::error::LedgerError;
use crate::sailing::SailingLedger;
use ferry_core::tariff::{is_tall, special_fare, STANDARD_FARE, STANDARD_VEHICLE_LENGTH};
use ferry_core::{Lane, Reservation, SailingId, Vehicle};
use ferry_storage::{Located, RecordStore};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// What check-in reports back to the operator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckIn {
    pub sailing_id: SailingId,
    pub license: String,
    pub fare: f32,
    pub people: u32,
    /// Length committed to the sailing, excluding the lane buffer
    pub vehicle_length: f32,
    pub lane: Lane,
}

/// A vehicle asking for space, before a lane is chosen
struct Booking<'a> {
    sailing_id: &'a SailingId,
    occupants: u32,
    vehicle: Vehicle,
}

impl Booking<'_> {
    /// Length to reserve, excluding the lane buffer
    fn length(&self) -> f32 {
        if self.vehicle.is_special {
            self.vehicle.length
        } else {
            STANDARD_VEHICLE_LENGTH
        }
    }

    /// Lanes to try, most preferred first
    fn lanes(&self) -> &'static [Lane] {
        if self.vehicle.is_special && is_tall(self.vehicle.height) {
            &[Lane::High]
        } else {
            &[Lane::Low, Lane::High]
        }
    }

    fn fare(&self, lane: Lane) -> f32 {
        if self.vehicle.is_special {
            special_fare(lane, self.vehicle.length)
        } else {
            STANDARD_FARE
        }
    }
}

/// Reservation records plus the vehicle registry they enroll into
pub struct ReservationLedger<H = VehicleDirectory> {
    store: RecordStore<Reservation>,
    vehicles: H,
}

impl<H: VehicleRegistry> ReservationLedger<H> {
    pub fn new(store: RecordStore<Reservation>, vehicles: H) -> Self {
        Self { store, vehicles }
    }

    pub fn open(path: &Path, vehicles: H) -> Result<Self, LedgerError> {
        Ok(Self::new(RecordStore::open(path)?, vehicles))
    }

    pub fn vehicles(&mut self) -> &mut H {
        &mut self.vehicles
    }

    /// Reserve space for a standard vehicle at the flat fare
    pub fn create_reservation<V: VesselLookup>(
        &mut self,
        sailings: &mut SailingLedger<V>,
        sailing_id: &SailingId,
        license: &str,
        occupants: u32,
        phone: &str,
    ) -> Result<Reservation, LedgerError> {
        self.book(
            sailings,
            Booking {
                sailing_id,
                occupants,
                vehicle: Vehicle::standard(license, phone),
            },
        )
    }

    /// Reserve space for an oversized vehicle, charged per metre by lane
    ///
    /// Vehicles taller than 2 m must use the high lane. Others prefer the
    /// low lane and fall back to the high lane when the low lane is full.
    #[allow(clippy::too_many_arguments)]
    pub fn create_special_reservation<V: VesselLookup>(
        &mut self,
        sailings: &mut SailingLedger<V>,
        sailing_id: &SailingId,
        license: &str,
        occupants: u32,
        phone: &str,
        height: f32,
        length: f32,
    ) -> Result<Reservation, LedgerError> {
        if !(height > 0.0 && height.is_finite() && length > 0.0 && length.is_finite()) {
            return Err(LedgerError::InvalidInput(
                "special vehicle height and length must be positive".to_string(),
            ));
        }
        self.book(
            sailings,
            Booking {
                sailing_id,
                occupants,
                vehicle: Vehicle::special(license, phone, height, length),
            },
        )
    }

    fn book<V: VesselLookup>(
        &mut self,
        sailings: &mut SailingLedger<V>,
        booking: Booking<'_>,
    ) -> Result<Reservation, LedgerError> {
        let sailing_id = booking.sailing_id;
        let license = booking.vehicle.license.as_str();
        if license.is_empty() {
            return Err(LedgerError::InvalidInput(
                "vehicle license must not be empty".to_string(),
            ));
        }
        if booking.occupants == 0 {
            return Err(LedgerError::InvalidInput(
                "a reservation needs at least one occupant".to_string(),
            ));
        }

        if !sailings.exists(sailing_id)? {
            return Err(LedgerError::SailingNotFound(sailing_id.clone()));
        }
        if self.find(sailing_id, license)?.is_some() {
            return Err(LedgerError::DuplicateReservation {
                sailing_id: sailing_id.clone(),
                license: license.to_string(),
            });
        }
        if !sailings.has_any_vehicle_capacity(sailing_id)? {
            return Err(LedgerError::NoVehicleCapacity(sailing_id.clone()));
        }
        if !sailings.has_people_capacity(sailing_id, booking.occupants)? {
            return Err(LedgerError::NoPeopleCapacity {
                sailing_id: sailing_id.clone(),
                requested: booking.occupants,
                available: sailings.seats_left(sailing_id)?,
            });
        }

        let length = booking.length();
        let mut chosen = None;
        for &lane in booking.lanes() {
            if sailings.lane_has_room(sailing_id, lane, length)? {
                chosen = Some(lane);
                break;
            }
            debug!(sailing = %sailing_id, %lane, length, "lane full, trying next");
        }
        let lane = chosen.ok_or_else(|| LedgerError::NoLaneSpace {
            sailing_id: sailing_id.clone(),
            length,
        })?;

        if !self.vehicles.exists(license)? {
            self.vehicles.register(&booking.vehicle)?;
        }

        let reservation = Reservation {
            sailing_id: sailing_id.clone(),
            vehicle_license: license.to_string(),
            fare: booking.fare(lane),
            people_occupants: booking.occupants,
            vehicle_height: booking.vehicle.height,
            vehicle_length: booking.vehicle.length,
            used_high_lane: lane == Lane::High,
            checked_in: false,
        };

        sailings.allocate_lane(sailing_id, lane, length)?;
        self.store.append(&reservation)?;

        info!(
            sailing = %sailing_id,
            license,
            %lane,
            fare = reservation.fare,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Cancel a reservation, returning its capacity to the sailing
    ///
    /// The lane release is written before the reservation is deleted.
    pub fn cancel_reservation<V: VesselLookup>(
        &mut self,
        sailings: &mut SailingLedger<V>,
        sailing_id: &SailingId,
        license: &str,
    ) -> Result<Reservation, LedgerError> {
        let reservation = self.locate(sailing_id, license)?.record;
        let length = reservation.booked_length();

        sailings.release_lane(sailing_id, reservation.lane(), length)?;
        if reservation.checked_in {
            sailings.revert_occupancy(sailing_id, reservation.people_occupants, length)?;
        }
        self.store
            .delete_where(|r| r.matches(sailing_id, license))?;

        info!(
            sailing = %sailing_id,
            license,
            was_checked_in = reservation.checked_in,
            "reservation cancelled"
        );
        Ok(reservation)
    }

    /// Check a vehicle in, committing its occupancy to the sailing
    ///
    /// Only reservations that are not yet checked in are eligible.
    pub fn check_in<V: VesselLookup>(
        &mut self,
        sailings: &mut SailingLedger<V>,
        sailing_id: &SailingId,
        license: &str,
    ) -> Result<CheckIn, LedgerError> {
        let Located {
            offset,
            mut record,
        } = self
            .store
            .find_first(|r| r.matches(sailing_id, license) && !r.checked_in)?
            .ok_or_else(|| LedgerError::ReservationNotFound {
                sailing_id: sailing_id.clone(),
                license: license.to_string(),
            })?;

        if !sailings.has_people_capacity(sailing_id, record.people_occupants)? {
            return Err(LedgerError::NoPeopleCapacity {
                sailing_id: sailing_id.clone(),
                requested: record.people_occupants,
                available: sailings.seats_left(sailing_id)?,
            });
        }

        sailings.commit_occupancy(sailing_id, record.people_occupants, record.booked_length())?;
        record.checked_in = true;
        self.store.update_at(offset, &record)?;

        info!(sailing = %sailing_id, license, fare = record.fare, "vehicle checked in");
        Ok(CheckIn {
            sailing_id: record.sailing_id.clone(),
            license: record.vehicle_license.clone(),
            fare: record.fare,
            people: record.people_occupants,
            vehicle_length: record.booked_length(),
            lane: record.lane(),
        })
    }

    /// Fetch a reservation by its natural key
    pub fn reservation(
        &mut self,
        sailing_id: &SailingId,
        license: &str,
    ) -> Result<Reservation, LedgerError> {
        Ok(self.locate(sailing_id, license)?.record)
    }

    /// All reservations on a sailing, in booking order
    pub fn reservations_for_sailing(
        &mut self,
        sailing_id: &SailingId,
    ) -> Result<Vec<Reservation>, LedgerError> {
        let mut matches = Vec::new();
        self.store.for_each(|r| {
            if &r.sailing_id == sailing_id {
                matches.push(r.clone());
            }
        })?;
        Ok(matches)
    }

    /// All reservations held by one vehicle, across sailings
    pub fn reservations_for_license(
        &mut self,
        license: &str,
    ) -> Result<Vec<Reservation>, LedgerError> {
        let mut matches = Vec::new();
        self.store.for_each(|r| {
            if r.vehicle_license == license {
                matches.push(r.clone());
            }
        })?;
        Ok(matches)
    }

    pub fn has_reservations(&mut self, sailing_id: &SailingId) -> Result<bool, LedgerError> {
        Ok(self
            .store
            .find_first(|r| &r.sailing_id == sailing_id)?
            .is_some())
    }

    pub fn close(&mut self) -> Result<(), LedgerError> {
        Ok(self.store.close()?)
    }

    fn find(
        &mut self,
        sailing_id: &SailingId,
        license: &str,
    ) -> Result<Option<Located<Reservation>>, LedgerError> {
        Ok(self.store.find_first(|r| r.matches(sailing_id, license))?)
    }

    fn locate(
        &mut self,
        sailing_id: &SailingId,
        license: &str,
    ) -> Result<Located<Reservation>, LedgerError> {
        self.find(sailing_id, license)?
            .ok_or_else(|| LedgerError::ReservationNotFound {
                sailing_id: sailing_id.clone(),
                license: license.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "reservation_tests.rs"]
mod tests;
