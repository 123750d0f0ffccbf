// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query-layer configuration.
//!
//! The only process-wide setting this crate consumes is the default IANA
//! time zone used when a caller does not pass an explicit zone. It is
//! resolved, in order, from:
//!
//! 1. An explicit `Config` loaded from a TOML file
//! 2. The `DQ_ZONE` environment variable
//! 3. The built-in fallback `Europe/Berlin`

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const ZONE_ENV_VAR: &str = "DQ_ZONE";

/// Built-in fallback zone when neither config nor environment supply one.
pub const FALLBACK_ZONE: &str = "Europe/Berlin";

/// Configuration for the query layer, stored as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default IANA zone for time-range resolution (e.g. "Europe/Berlin").
    #[serde(default = "default_zone_name")]
    pub zone: String,
}

fn default_zone_name() -> String {
    FALLBACK_ZONE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            zone: default_zone_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Build configuration from the environment, falling back to the
    /// built-in default zone.
    pub fn from_env() -> Config {
        let zone = std::env::var(ZONE_ENV_VAR).unwrap_or_else(|_| default_zone_name());
        Config { zone }
    }

    /// Resolve the configured zone name against the IANA database.
    pub fn tz(&self) -> Result<Tz> {
        self.zone.parse::<Tz>().map_err(|_| Error::UnknownZone {
            zone: self.zone.clone(),
        })
    }
}

/// The process-wide default zone.
///
/// Reads the environment-backed configuration and resolves it; an
/// unparseable `DQ_ZONE` value degrades to the built-in fallback rather
/// than failing the call.
pub fn default_zone() -> Tz {
    match Config::from_env().tz() {
        Ok(tz) => tz,
        Err(_) => chrono_tz::Europe::Berlin,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
