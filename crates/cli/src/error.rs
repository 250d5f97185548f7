// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with suggestions.
//!
//! Ledger failures are mapped to a message plus hints on what the operator
//! can try next.

use ferry_engine::{ErrorKind, LedgerError};
use std::fmt;

/// Error with recovery suggestions for display on stderr.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl From<&LedgerError> for CliError {
    fn from(err: &LedgerError) -> Self {
        let base = CliError::new(err.to_string());
        match err {
            LedgerError::SailingNotFound(_) => {
                base.with_suggestion("list sailings with: ferry sailing report")
            }
            LedgerError::VesselNotFound(_) => {
                base.with_suggestion("list vessels with: ferry vessel list")
            }
            LedgerError::ReservationNotFound { sailing_id, .. } => base
                .with_suggestion(format!(
                    "list reservations with: ferry reservation list {}",
                    sailing_id
                ))
                .with_suggestion("a vehicle can only be checked in once"),
            LedgerError::SailingHasReservations(id) => base.with_suggestion(format!(
                "cancel its reservations first: ferry reservation list {}",
                id
            )),
            LedgerError::VesselInUse(_) => {
                base.with_suggestion("delete the vessel's sailings first")
            }
            LedgerError::NoLaneSpace { .. } | LedgerError::NoVehicleCapacity(_) => {
                base.with_suggestion("try another sailing")
            }
            _ => match err.kind() {
                ErrorKind::Storage => {
                    base.with_suggestion("check that the data directory is writable")
                }
                _ => base,
            },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
