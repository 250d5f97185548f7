// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk layouts for the terminal's record types
//!
//! | record      | layout                                                            | bytes |
//! |-------------|-------------------------------------------------------------------|-------|
//! | Sailing     | id[16] vessel[30] high f32 low f32 used f32 people u32 vehicles u32 | 66    |
//! | Reservation | sailing[16] license[20] fare f32 occupants u32 height f32 length f32 high u8 checked u8 | 54 |
//! | Vessel      | name[30] max_passengers u32 high f32 low f32                      | 42    |
//! | Vehicle     | license[20] phone[15] height f32 length f32 special u8           | 44    |

use crate::codec::{FieldReader, FieldWriter, FixedRecord};
use crate::error::StorageError;
use ferry_core::{Reservation, Sailing, SailingId, Vehicle, Vessel};

pub const SAILING_ID_WIDTH: usize = 16;
pub const VESSEL_NAME_WIDTH: usize = 30;
pub const LICENSE_WIDTH: usize = 20;
pub const PHONE_WIDTH: usize = 15;

impl FixedRecord for Sailing {
    const SIZE: usize = SAILING_ID_WIDTH + VESSEL_NAME_WIDTH + 4 * 5;

    fn encode(&self, buf: &mut [u8]) -> Result<(), StorageError> {
        let mut w = FieldWriter::new(buf);
        w.str("sailing_id", self.id.as_str(), SAILING_ID_WIDTH)?;
        w.str("vessel_id", &self.vessel_id, VESSEL_NAME_WIDTH)?;
        w.f32(self.high_remaining);
        w.f32(self.low_remaining);
        w.f32(self.lane_length_used);
        w.u32(self.people_on_board);
        w.u32(self.vehicles_on_board);
        Ok(())
    }

    fn decode(buf: &[u8]) -> Result<Self, StorageError> {
        let mut r = FieldReader::new(buf);
        Ok(Sailing {
            id: SailingId(r.str("sailing_id", SAILING_ID_WIDTH)?),
            vessel_id: r.str("vessel_id", VESSEL_NAME_WIDTH)?,
            high_remaining: r.f32(),
            low_remaining: r.f32(),
            lane_length_used: r.f32(),
            people_on_board: r.u32(),
            vehicles_on_board: r.u32(),
        })
    }
}

impl FixedRecord for Reservation {
    const SIZE: usize = SAILING_ID_WIDTH + LICENSE_WIDTH + 4 * 4 + 2;

    fn encode(&self, buf: &mut [u8]) -> Result<(), StorageError> {
        let mut w = FieldWriter::new(buf);
        w.str("sailing_id", self.sailing_id.as_str(), SAILING_ID_WIDTH)?;
        w.str("vehicle_license", &self.vehicle_license, LICENSE_WIDTH)?;
        w.f32(self.fare);
        w.u32(self.people_occupants);
        w.f32(self.vehicle_height);
        w.f32(self.vehicle_length);
        w.bool(self.used_high_lane);
        w.bool(self.checked_in);
        Ok(())
    }

    fn decode(buf: &[u8]) -> Result<Self, StorageError> {
        let mut r = FieldReader::new(buf);
        Ok(Reservation {
            sailing_id: SailingId(r.str("sailing_id", SAILING_ID_WIDTH)?),
            vehicle_license: r.str("vehicle_license", LICENSE_WIDTH)?,
            fare: r.f32(),
            people_occupants: r.u32(),
            vehicle_height: r.f32(),
            vehicle_length: r.f32(),
            used_high_lane: r.bool("used_high_lane")?,
            checked_in: r.bool("checked_in")?,
        })
    }
}

impl FixedRecord for Vessel {
    const SIZE: usize = VESSEL_NAME_WIDTH + 4 * 3;

    fn encode(&self, buf: &mut [u8]) -> Result<(), StorageError> {
        let mut w = FieldWriter::new(buf);
        w.str("vessel_name", &self.name, VESSEL_NAME_WIDTH)?;
        w.u32(self.max_passengers);
        w.f32(self.high_lane_length);
        w.f32(self.low_lane_length);
        Ok(())
    }

    fn decode(buf: &[u8]) -> Result<Self, StorageError> {
        let mut r = FieldReader::new(buf);
        Ok(Vessel {
            name: r.str("vessel_name", VESSEL_NAME_WIDTH)?,
            max_passengers: r.u32(),
            high_lane_length: r.f32(),
            low_lane_length: r.f32(),
        })
    }
}

impl FixedRecord for Vehicle {
    const SIZE: usize = LICENSE_WIDTH + PHONE_WIDTH + 4 * 2 + 1;

    fn encode(&self, buf: &mut [u8]) -> Result<(), StorageError> {
        let mut w = FieldWriter::new(buf);
        w.str("license", &self.license, LICENSE_WIDTH)?;
        w.str("phone", &self.phone, PHONE_WIDTH)?;
        w.f32(self.height);
        w.f32(self.length);
        w.bool(self.is_special);
        Ok(())
    }

    fn decode(buf: &[u8]) -> Result<Self, StorageError> {
        let mut r = FieldReader::new(buf);
        Ok(Vehicle {
            license: r.str("license", LICENSE_WIDTH)?,
            phone: r.str("phone", PHONE_WIDTH)?,
            height: r.f32(),
            length: r.f32(),
            is_special: r.bool("is_special")?,
        })
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
