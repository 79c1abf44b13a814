//! Configuration management
//!
//! Optional TOML file describing the default bindings and per-logger
//! threshold overrides. Level names are parsed leniently: an unknown name
//! falls back to the built-in default (or, for overrides, changes nothing).

use crate::constants::{DEFAULT_LEVEL, DEFAULT_SERVER_LEVEL, DEFAULT_TRANSPORT_TIMEOUT_SECS};
use crate::defaults::DefaultOptions;
use crate::error::{Result, SploggerError};
use crate::level::Level;
use crate::splogger::Splogger;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

// =============================================================================
// Application Configuration
// =============================================================================

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SploggerConfig {
    pub levels: LevelsConfig,
    pub server: ServerConfig,
    /// Per-logger overrides keyed by logger name
    pub loggers: BTreeMap<String, LoggerOverride>,
}

/// Global thresholds applied by `use_defaults`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelsConfig {
    /// Local threshold name (e.g. "debug")
    pub default: String,
    /// Server threshold name (e.g. "warning")
    pub server: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Log ingestion endpoint (absent = server path has nowhere to send)
    pub url: Option<String>,
    /// Value sent as `location` in every server body
    pub location: Option<String>,
    /// HTTP timeout per POST
    pub timeout_secs: u64,
}

/// Thresholds for one named logger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOverride {
    pub level: Option<String>,
    pub server_level: Option<String>,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_LEVEL.name().to_lowercase(),
            server: DEFAULT_SERVER_LEVEL.name().to_lowercase(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: None,
            location: None,
            timeout_secs: DEFAULT_TRANSPORT_TIMEOUT_SECS,
        }
    }
}

impl SploggerConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SploggerError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| SploggerError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SploggerError::ConfigValidation {
            field: "config",
            reason: e.to_string(),
        })
    }

    /// Reject values that can only be mistakes
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.server.url {
            if url.trim().is_empty() {
                return Err(SploggerError::ConfigValidation {
                    field: "server.url",
                    reason: "must not be empty".into(),
                });
            }
        }
        if self.server.timeout_secs == 0 {
            return Err(SploggerError::ConfigValidation {
                field: "server.timeout_secs",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Options for `Splogger::use_defaults`; console and transport keep
    /// their defaults
    pub fn default_options(&self) -> DefaultOptions {
        DefaultOptions {
            server_url: self.server.url.clone(),
            default_level: lenient_level("levels.default", &self.levels.default),
            default_server_level: lenient_level("levels.server", &self.levels.server),
            location: self.server.location.clone(),
            transport_timeout: Duration::from_secs(self.server.timeout_secs),
            ..Default::default()
        }
    }

    /// Apply per-logger overrides, registering each named logger
    pub fn apply_overrides(&self, splogger: &Splogger) {
        for (name, over) in &self.loggers {
            let logger = splogger.get(name);
            if let Some(level) = &over.level {
                logger.set_level_named(level);
            }
            if let Some(level) = &over.server_level {
                logger.set_server_level_named(level);
            }
        }
    }
}

fn lenient_level(field: &str, value: &str) -> Option<Level> {
    match value.parse::<Level>() {
        Ok(level) => Some(level),
        Err(e) => {
            warn!("Invalid {}: {}, using default", field, e);
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
