// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal configuration
//!
//! Loaded from TOML. Every field is optional; missing fields fall back to
//! the defaults below.
//!
//! ```toml
//! data_dir = "/var/lib/ferry"
//! report_page_size = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where the data files live and how reports are paged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FerryConfig {
    pub data_dir: PathBuf,
    pub sailings_file: String,
    pub reservations_file: String,
    pub vessels_file: String,
    pub vehicles_file: String,
    /// Sailings shown per report page
    pub report_page_size: usize,
}

impl Default for FerryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("ferry-data"),
            sailings_file: "sailings.dat".to_string(),
            reservations_file: "reservations.dat".to_string(),
            vessels_file: "vessels.dat".to_string(),
            vehicles_file: "vehicles.dat".to_string(),
            report_page_size: 5,
        }
    }
}

impl FerryConfig {
    /// Default configuration rooted at `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), data_dir = %config.data_dir.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: FerryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.report_page_size == 0 {
            return Err(ConfigError::Invalid(
                "report_page_size must be at least 1".to_string(),
            ));
        }
        let names = [
            &self.sailings_file,
            &self.reservations_file,
            &self.vessels_file,
            &self.vehicles_file,
        ];
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigError::Invalid("data file names must not be empty".to_string()));
            }
            if names[..i].contains(name) {
                return Err(ConfigError::Invalid(format!(
                    "data file {:?} is used for more than one record type",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn sailings_path(&self) -> PathBuf {
        self.data_dir.join(&self.sailings_file)
    }

    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }

    pub fn vessels_path(&self) -> PathBuf {
        self.data_dir.join(&self.vessels_file)
    }

    pub fn vehicles_path(&self) -> PathBuf {
        self.data_dir.join(&self.vehicles_file)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
