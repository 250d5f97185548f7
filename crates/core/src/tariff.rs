// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tariff and lane-space constants
//!
//! Every booked vehicle occupies its length plus [`LANE_BUFFER`] of lane
//! space. Standard vehicles are booked at [`STANDARD_VEHICLE_LENGTH`] and pay
//! [`STANDARD_FARE`]; special vehicles pay per metre at the rate of the lane
//! that absorbed them.
//!
//! Lane space is accounted in whole centimetres. Allocating and then
//! releasing the same vehicle therefore restores a lane exactly, whatever
//! decimal length the vehicle was booked at.

use crate::sailing::Lane;

/// Manoeuvring margin added to every vehicle booking, in metres
pub const LANE_BUFFER: f32 = 0.5;

/// Nominal length assumed for a standard vehicle, in metres
pub const STANDARD_VEHICLE_LENGTH: f32 = 7.0;

/// Flat fare charged for a standard vehicle
pub const STANDARD_FARE: f32 = 14.0;

/// Vehicles taller than this must travel in the high lane, in metres
pub const TALL_VEHICLE_HEIGHT: f32 = 2.0;

/// Per-metre fare for a special vehicle in the low lane
pub const LOW_LANE_RATE: f32 = 2.0;

/// Per-metre fare for a special vehicle in the high lane
pub const HIGH_LANE_RATE: f32 = 3.0;

/// Round a length in metres to whole centimetres
pub fn centimetres(metres: f32) -> i64 {
    (f64::from(metres) * 100.0).round() as i64
}

/// Convert whole centimetres back to metres
pub fn metres(centimetres: i64) -> f32 {
    (centimetres as f64 / 100.0) as f32
}

/// Lane space consumed by a vehicle of the given length, in centimetres
pub fn footprint_cm(length: f32) -> i64 {
    centimetres(length) + centimetres(LANE_BUFFER)
}

/// Whether a vehicle of this height is forced into the high lane
pub fn is_tall(height: f32) -> bool {
    height > TALL_VEHICLE_HEIGHT
}

/// Fare for a special vehicle of `length` metres booked into `lane`
pub fn special_fare(lane: Lane, length: f32) -> f32 {
    match lane {
        Lane::Low => length * LOW_LANE_RATE,
        Lane::High => length * HIGH_LANE_RATE,
    }
}
