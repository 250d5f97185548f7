// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sailings and their lane capacity
//!
//! A sailing is one departure of a vessel. It carries two independent lane
//! pools (low and high ceiling) seeded from the vessel, plus the occupancy
//! committed at check-in.

use crate::vessel::Vessel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors deriving or parsing a sailing ID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SailingIdError {
    #[error("terminal name must have at least 3 letters: {0:?}")]
    Terminal(String),
    #[error("departure day must be 1-31, got {0}")]
    Day(u8),
    #[error("departure hour must be 0-23, got {0}")]
    Hour(u8),
    #[error("malformed sailing ID {0:?}, expected TTT-DD-HH")]
    Malformed(String),
}

/// Unique identifier for a sailing, formatted `TTT-DD-HH`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SailingId(pub String);

impl SailingId {
    /// Derive the ID from the departure terminal name, day of month and hour
    pub fn derive(terminal: &str, day: u8, hour: u8) -> Result<Self, SailingIdError> {
        let code: String = terminal.trim().chars().take(3).collect();
        if code.chars().count() < 3 || !code.chars().all(|c| c.is_alphabetic()) {
            return Err(SailingIdError::Terminal(terminal.to_string()));
        }
        if !(1..=31).contains(&day) {
            return Err(SailingIdError::Day(day));
        }
        if hour > 23 {
            return Err(SailingIdError::Hour(hour));
        }
        Ok(SailingId(format!(
            "{}-{:02}-{:02}",
            code.to_uppercase(),
            day,
            hour
        )))
    }

    /// Validate a user-supplied ID against the `TTT-DD-HH` format
    pub fn parse(raw: &str) -> Result<Self, SailingIdError> {
        let id = SailingId(raw.trim().to_string());
        let (day, hour) = id
            .departure()
            .ok_or_else(|| SailingIdError::Malformed(raw.to_string()))?;
        if !(1..=31).contains(&day) {
            return Err(SailingIdError::Day(day));
        }
        if hour > 23 {
            return Err(SailingIdError::Hour(hour));
        }
        Ok(id)
    }

    /// Day and hour encoded in the ID, if it is well formed
    pub fn departure(&self) -> Option<(u8, u8)> {
        let mut parts = self.0.split('-');
        let code = parts.next()?;
        let day = parts.next()?;
        let hour = parts.next()?;
        if parts.next().is_some() || code.chars().count() != 3 {
            return None;
        }
        if day.len() != 2 || hour.len() != 2 {
            return None;
        }
        Some((day.parse().ok()?, hour.parse().ok()?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SailingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SailingId {
    fn from(s: &str) -> Self {
        SailingId(s.to_string())
    }
}

impl From<String> for SailingId {
    fn from(s: String) -> Self {
        SailingId(s)
    }
}

/// One of the two capacity pools on a vessel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    /// Low-ceiling lane, preferred for ordinary vehicles
    Low,
    /// High-ceiling lane, mandatory for tall vehicles
    High,
}

impl Lane {
    pub fn name(&self) -> &'static str {
        match self {
            Lane::Low => "low",
            Lane::High => "high",
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A scheduled departure and its live capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sailing {
    pub id: SailingId,
    pub vessel_id: String,
    /// Metres still bookable in the high lane
    pub high_remaining: f32,
    /// Metres still bookable in the low lane
    pub low_remaining: f32,
    /// Metres committed by checked-in vehicles
    pub lane_length_used: f32,
    pub people_on_board: u32,
    pub vehicles_on_board: u32,
}

impl Sailing {
    /// Create an empty sailing with both lanes seeded from the vessel
    pub fn new(id: SailingId, vessel: &Vessel) -> Self {
        Self {
            id,
            vessel_id: vessel.name.clone(),
            high_remaining: vessel.high_lane_length,
            low_remaining: vessel.low_lane_length,
            lane_length_used: 0.0,
            people_on_board: 0,
            vehicles_on_board: 0,
        }
    }

    pub fn remaining(&self, lane: Lane) -> f32 {
        match lane {
            Lane::Low => self.low_remaining,
            Lane::High => self.high_remaining,
        }
    }

    pub fn remaining_mut(&mut self, lane: Lane) -> &mut f32 {
        match lane {
            Lane::Low => &mut self.low_remaining,
            Lane::High => &mut self.high_remaining,
        }
    }

    /// True if either lane has any length left
    pub fn has_vehicle_capacity(&self) -> bool {
        self.low_remaining > 0.0 || self.high_remaining > 0.0
    }
}

#[cfg(test)]
#[path = "sailing_tests.rs"]
mod tests;
