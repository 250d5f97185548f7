// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vehicle registrations

use serde::{Deserialize, Serialize};

/// A vehicle known to the terminal, registered on its first reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub license: String,
    pub phone: String,
    /// Height in metres, 0 for standard vehicles
    pub height: f32,
    /// Length in metres, 0 for standard vehicles
    pub length: f32,
    pub is_special: bool,
}

impl Vehicle {
    /// A standard vehicle with no recorded dimensions
    pub fn standard(license: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            license: license.into(),
            phone: phone.into(),
            height: 0.0,
            length: 0.0,
            is_special: false,
        }
    }

    /// An oversized vehicle with explicit dimensions
    pub fn special(
        license: impl Into<String>,
        phone: impl Into<String>,
        height: f32,
        length: f32,
    ) -> Self {
        Self {
            license: license.into(),
            phone: phone.into(),
            height,
            length,
            is_special: true,
        }
    }
}
