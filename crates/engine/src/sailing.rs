// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sailing ledger
//!
//! Owns the sailing records and all capacity bookkeeping. Capacity checks
//! and allocations are separate calls so the reservation ledger can try
//! lanes in preference order before committing to one.
//!
//! Every mutation locates the sailing, adjusts it in memory, and writes it
//! back at the same offset with a single `update_at`. Lane arithmetic is
//! done in whole centimetres and kept within `0..=` the vessel's lane length.

use crate::directory::{VesselDirectory, VesselLookup};
use crate::error::LedgerError;
use crate::report::{SailingReport, SailingSummary};
use ferry_core::tariff::{centimetres, footprint_cm, metres};
use ferry_core::{Lane, Sailing, SailingId};
use ferry_storage::{Located, RecordStore};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Sailing records plus the vessel directory they were seeded from
pub struct SailingLedger<V = VesselDirectory> {
    store: RecordStore<Sailing>,
    vessels: V,
}

impl<V: VesselLookup> SailingLedger<V> {
    pub fn new(store: RecordStore<Sailing>, vessels: V) -> Self {
        Self { store, vessels }
    }

    pub fn open(path: &Path, vessels: V) -> Result<Self, LedgerError> {
        Ok(Self::new(RecordStore::open(path)?, vessels))
    }

    pub fn vessels(&mut self) -> &mut V {
        &mut self.vessels
    }

    /// Create a zero-occupancy sailing with lanes seeded from the vessel
    pub fn create_sailing(
        &mut self,
        vessel_id: &str,
        terminal: &str,
        day: u8,
        hour: u8,
    ) -> Result<SailingId, LedgerError> {
        let id = SailingId::derive(terminal, day, hour)?;
        if self.exists(&id)? {
            return Err(LedgerError::DuplicateSailing(id));
        }
        let vessel = self.vessels.get(vessel_id)?;

        self.store.append(&Sailing::new(id.clone(), &vessel))?;
        info!(sailing = %id, vessel = vessel_id, "sailing created");
        Ok(id)
    }

    pub fn delete_sailing(&mut self, id: &SailingId) -> Result<(), LedgerError> {
        if self.store.delete_where(|s| &s.id == id)? == 0 {
            return Err(LedgerError::SailingNotFound(id.clone()));
        }
        info!(sailing = %id, "sailing deleted");
        Ok(())
    }

    pub fn exists(&mut self, id: &SailingId) -> Result<bool, LedgerError> {
        Ok(self.store.find_first(|s| &s.id == id)?.is_some())
    }

    /// Fetch the full sailing record
    pub fn sailing(&mut self, id: &SailingId) -> Result<Sailing, LedgerError> {
        Ok(self.locate(id)?.record)
    }

    /// Whether any sailing is scheduled on the vessel
    pub fn vessel_has_sailings(&mut self, vessel_id: &str) -> Result<bool, LedgerError> {
        Ok(self.store.find_first(|s| s.vessel_id == vessel_id)?.is_some())
    }

    /// True if either lane has strictly positive remaining length
    pub fn has_any_vehicle_capacity(&mut self, id: &SailingId) -> Result<bool, LedgerError> {
        Ok(self.locate(id)?.record.has_vehicle_capacity())
    }

    /// True if `additional` more people fit under the vessel's passenger cap
    pub fn has_people_capacity(
        &mut self,
        id: &SailingId,
        additional: u32,
    ) -> Result<bool, LedgerError> {
        Ok(self.seats_left(id)? >= additional)
    }

    /// Passenger seats not yet committed by check-in
    pub fn seats_left(&mut self, id: &SailingId) -> Result<u32, LedgerError> {
        let sailing = self.locate(id)?.record;
        let vessel = self.vessels.get(&sailing.vessel_id)?;
        Ok(vessel.max_passengers.saturating_sub(sailing.people_on_board))
    }

    /// True if `lane` can absorb a vehicle of `length` plus the lane buffer
    pub fn lane_has_room(
        &mut self,
        id: &SailingId,
        lane: Lane,
        length: f32,
    ) -> Result<bool, LedgerError> {
        let remaining = centimetres(self.locate(id)?.record.remaining(lane));
        Ok(remaining >= footprint_cm(length))
    }

    /// Take `length` plus the lane buffer out of `lane`
    ///
    /// Does not re-check room; callers confirm with [`Self::lane_has_room`] first.
    pub fn allocate_lane(
        &mut self,
        id: &SailingId,
        lane: Lane,
        length: f32,
    ) -> Result<(), LedgerError> {
        let sailing = self.modify(id, |s| {
            let left = centimetres(s.remaining(lane)) - footprint_cm(length);
            *s.remaining_mut(lane) = metres(left.max(0));
        })?;
        debug!(sailing = %id, %lane, length, remaining = sailing.remaining(lane), "lane allocated");
        Ok(())
    }

    /// Give `length` plus the lane buffer back to `lane`
    ///
    /// Never raises the lane above the vessel's full lane length.
    pub fn release_lane(
        &mut self,
        id: &SailingId,
        lane: Lane,
        length: f32,
    ) -> Result<(), LedgerError> {
        let vessel_id = self.locate(id)?.record.vessel_id;
        let capacity = self.vessels.get(&vessel_id)?.lane_length(lane);
        let sailing = self.modify(id, |s| {
            let left = centimetres(s.remaining(lane)) + footprint_cm(length);
            *s.remaining_mut(lane) = metres(left).min(capacity);
        })?;
        debug!(sailing = %id, %lane, length, remaining = sailing.remaining(lane), "lane released");
        Ok(())
    }

    /// Record a checked-in vehicle and its passengers as on board
    pub fn commit_occupancy(
        &mut self,
        id: &SailingId,
        people: u32,
        vehicle_length: f32,
    ) -> Result<(), LedgerError> {
        let sailing = self.modify(id, |s| {
            s.people_on_board += people;
            s.vehicles_on_board += 1;
            s.lane_length_used =
                metres(centimetres(s.lane_length_used) + footprint_cm(vehicle_length));
        })?;
        debug!(
            sailing = %id,
            people_on_board = sailing.people_on_board,
            vehicles_on_board = sailing.vehicles_on_board,
            "occupancy committed"
        );
        Ok(())
    }

    /// Undo [`Self::commit_occupancy`] for a cancelled check-in
    pub fn revert_occupancy(
        &mut self,
        id: &SailingId,
        people: u32,
        vehicle_length: f32,
    ) -> Result<(), LedgerError> {
        let sailing = self.modify(id, |s| {
            s.people_on_board = s.people_on_board.saturating_sub(people);
            s.vehicles_on_board = s.vehicles_on_board.saturating_sub(1);
            let used = centimetres(s.lane_length_used) - footprint_cm(vehicle_length);
            s.lane_length_used = metres(used.max(0));
        })?;
        debug!(
            sailing = %id,
            people_on_board = sailing.people_on_board,
            vehicles_on_board = sailing.vehicles_on_board,
            "occupancy reverted"
        );
        Ok(())
    }

    pub fn people_on_board(&mut self, id: &SailingId) -> Result<u32, LedgerError> {
        Ok(self.locate(id)?.record.people_on_board)
    }

    pub fn vehicles_on_board(&mut self, id: &SailingId) -> Result<u32, LedgerError> {
        Ok(self.locate(id)?.record.vehicles_on_board)
    }

    /// All sailings ordered by departure, with utilization against their vessels
    pub fn report(&mut self) -> Result<SailingReport, LedgerError> {
        let sailings = self.store.records()?;
        let mut vessels = HashMap::new();
        let mut summaries = Vec::with_capacity(sailings.len());

        for sailing in sailings {
            if !vessels.contains_key(&sailing.vessel_id) {
                let vessel = match self.vessels.get(&sailing.vessel_id) {
                    Ok(vessel) => Some(vessel),
                    Err(LedgerError::VesselNotFound(_)) => {
                        warn!(sailing = %sailing.id, vessel = %sailing.vessel_id, "sailing references unknown vessel");
                        None
                    }
                    Err(e) => return Err(e),
                };
                vessels.insert(sailing.vessel_id.clone(), vessel);
            }
            let vessel = vessels.get(&sailing.vessel_id).and_then(Option::as_ref);
            summaries.push(SailingSummary::new(sailing, vessel));
        }

        Ok(SailingReport::new(summaries))
    }

    pub fn close(&mut self) -> Result<(), LedgerError> {
        Ok(self.store.close()?)
    }

    fn locate(&mut self, id: &SailingId) -> Result<Located<Sailing>, LedgerError> {
        self.store
            .find_first(|s| &s.id == id)?
            .ok_or_else(|| LedgerError::SailingNotFound(id.clone()))
    }

    fn modify(
        &mut self,
        id: &SailingId,
        change: impl FnOnce(&mut Sailing),
    ) -> Result<Sailing, LedgerError> {
        let Located { offset, mut record } = self.locate(id)?;
        change(&mut record);
        self.store.update_at(offset, &record)?;
        Ok(record)
    }
}

#[cfg(test)]
#[path = "sailing_tests.rs"]
mod tests;
