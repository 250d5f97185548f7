// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sailing report
//!
//! A snapshot of every sailing ordered by departure. Pages are produced
//! lazily from the snapshot and can be restarted by calling
//! [`SailingReport::pages`] again.

use ferry_core::{Sailing, SailingId, Vessel};
use serde::Serialize;

/// One sailing's line in the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SailingSummary {
    pub sailing_id: SailingId,
    pub vessel_id: String,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub high_remaining: f32,
    pub low_remaining: f32,
    pub lane_length_used: f32,
    pub people_on_board: u32,
    pub vehicles_on_board: u32,
    /// Share of the vessel's total lane length currently reserved, 0-100
    pub lane_utilization_pct: Option<f32>,
    /// Share of the vessel's passenger cap on board, 0-100
    pub passenger_utilization_pct: Option<f32>,
}

impl SailingSummary {
    /// Summarize a sailing; percentages are absent when the vessel is unknown
    pub fn new(sailing: Sailing, vessel: Option<&Vessel>) -> Self {
        let departure = sailing.id.departure();
        let (lane_pct, passenger_pct) = match vessel {
            Some(vessel) => {
                let total = vessel.total_lane_length();
                let reserved = total - (sailing.high_remaining + sailing.low_remaining);
                (
                    Some(percent(reserved, total)),
                    Some(percent(
                        sailing.people_on_board as f32,
                        vessel.max_passengers as f32,
                    )),
                )
            }
            None => (None, None),
        };

        Self {
            day: departure.map(|(day, _)| day),
            hour: departure.map(|(_, hour)| hour),
            sailing_id: sailing.id,
            vessel_id: sailing.vessel_id,
            high_remaining: sailing.high_remaining,
            low_remaining: sailing.low_remaining,
            lane_length_used: sailing.lane_length_used,
            people_on_board: sailing.people_on_board,
            vehicles_on_board: sailing.vehicles_on_board,
            lane_utilization_pct: lane_pct,
            passenger_utilization_pct: passenger_pct,
        }
    }
}

fn percent(part: f32, whole: f32) -> f32 {
    if whole <= 0.0 {
        return 0.0;
    }
    (part / whole * 100.0).clamp(0.0, 100.0)
}

/// Every sailing, sorted ascending by (day, hour), then ID
#[derive(Debug, Clone, Default, Serialize)]
pub struct SailingReport {
    summaries: Vec<SailingSummary>,
}

impl SailingReport {
    pub fn new(mut summaries: Vec<SailingSummary>) -> Self {
        // Malformed IDs sort after every well-formed departure
        summaries.sort_by(|a, b| {
            let key_a = (a.day.unwrap_or(u8::MAX), a.hour.unwrap_or(u8::MAX));
            let key_b = (b.day.unwrap_or(u8::MAX), b.hour.unwrap_or(u8::MAX));
            key_a.cmp(&key_b).then_with(|| a.sailing_id.cmp(&b.sailing_id))
        });
        Self { summaries }
    }

    pub fn summaries(&self) -> &[SailingSummary] {
        &self.summaries
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Lazy sequence of pages of at most `page_size` sailings
    pub fn pages(&self, page_size: usize) -> std::slice::Chunks<'_, SailingSummary> {
        self.summaries.chunks(page_size.max(1))
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        self.summaries.len().div_ceil(page_size.max(1))
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
