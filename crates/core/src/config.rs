// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration for the reputation ledger
//!
//! Defaults match the deployed bot: history pages of 10 with a 60s view
//! timeout, management pages of 5 with a 120s session timeout, database at
//! `points.db`. `owner_id` is the single privileged identity the command
//! surface checks before schema setup and moderator entry points; the core
//! only carries it.

use crate::entry::UserId;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Page size and inactivity timeout for one paginated view
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    pub page_size: usize,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

/// Top-level ledger configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the SQLite database file
    pub database_path: PathBuf,
    /// The single privileged identity, consumed by the command surface
    pub owner_id: Option<UserId>,
    /// Read-only history view
    pub history: ViewConfig,
    /// Moderator management view
    pub manage: ViewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("points.db"),
            owner_id: None,
            history: ViewConfig {
                page_size: 10,
                timeout: Duration::from_secs(60),
            },
            manage: ViewConfig {
                page_size: 5,
                timeout: Duration::from_secs(120),
            },
        }
    }
}

impl Config {
    /// Parse configuration from TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
