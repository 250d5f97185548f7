// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod reservation;
pub mod sailing;
pub mod vessel;

use ferry_core::SailingId;

/// clap value parser for `TTT-DD-HH` sailing IDs
pub fn parse_sailing_id(raw: &str) -> Result<SailingId, String> {
    SailingId::parse(raw).map_err(|e| e.to_string())
}
