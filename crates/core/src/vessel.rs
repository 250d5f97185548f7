// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vessel definitions

use crate::sailing::Lane;
use serde::{Deserialize, Serialize};

/// Longest accepted vessel name, in characters
pub const MAX_VESSEL_NAME: usize = 25;

/// Upper bound on passenger capacity and lane lengths
pub const MAX_VESSEL_DIMENSION: u32 = 3600;

/// A registered vessel. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub name: String,
    pub max_passengers: u32,
    /// High-ceiling lane length in metres
    pub high_lane_length: f32,
    /// Low-ceiling lane length in metres
    pub low_lane_length: f32,
}

impl Vessel {
    pub fn new(
        name: impl Into<String>,
        max_passengers: u32,
        high_lane_length: f32,
        low_lane_length: f32,
    ) -> Self {
        Self {
            name: name.into(),
            max_passengers,
            high_lane_length,
            low_lane_length,
        }
    }

    /// Full length of one lane, the most a sailing can have remaining
    pub fn lane_length(&self, lane: Lane) -> f32 {
        match lane {
            Lane::Low => self.low_lane_length,
            Lane::High => self.high_lane_length,
        }
    }

    /// Combined length of both lanes
    pub fn total_lane_length(&self) -> f32 {
        self.high_lane_length + self.low_lane_length
    }

    /// Check the registration limits, returning a reason on failure
    pub fn validate(&self) -> Result<(), String> {
        let chars = self.name.chars().count();
        if chars == 0 || chars > MAX_VESSEL_NAME {
            return Err(format!(
                "vessel name must be 1-{} characters",
                MAX_VESSEL_NAME
            ));
        }
        if self.max_passengers == 0 || self.max_passengers > MAX_VESSEL_DIMENSION {
            return Err(format!(
                "passenger capacity must be 1-{}",
                MAX_VESSEL_DIMENSION
            ));
        }
        let limit = MAX_VESSEL_DIMENSION as f32;
        for (lane, length) in [
            ("high", self.high_lane_length),
            ("low", self.low_lane_length),
        ] {
            if !(length > 0.0 && length <= limit) {
                return Err(format!(
                    "{} lane length must be > 0 and <= {}",
                    lane, MAX_VESSEL_DIMENSION
                ));
            }
        }
        Ok(())
    }
}
