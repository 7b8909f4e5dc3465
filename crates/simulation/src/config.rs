//! Basin constants and the runtime `BasinConfig` resource.
//!
//! The constants are the reference values. `BasinConfig` carries the same
//! values at runtime so a JSON file can override them without a rebuild.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Height of the boundary towers synthesized when a profile traps nothing.
pub const DEFAULT_SENTINEL_HEIGHT: u32 = 5;
/// Drawing units per grid cell.
pub const UNIT_SIZE: u32 = 50;
/// Gap left between neighbouring columns, in drawing units.
pub const COLUMN_GAP: u32 = 2;
/// The grid is never shorter than this many cells, so short profiles still
/// get a visible grid.
pub const MIN_GRID_HEIGHT: u32 = 6;
/// Default destination for the exported HTML page.
pub const DEFAULT_EXPORT_PATH: &str = "rain_basin.html";
/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "RAIN_BASIN_CONFIG";

// =============================================================================
// BasinConfig resource
// =============================================================================

/// Runtime configuration. Missing JSON fields fall back to the constants above.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasinConfig {
    pub sentinel_height: u32,
    pub unit: u32,
    pub column_gap: u32,
    pub min_grid_height: u32,
    pub export_path: String,
}

impl Default for BasinConfig {
    fn default() -> Self {
        Self {
            sentinel_height: DEFAULT_SENTINEL_HEIGHT,
            unit: UNIT_SIZE,
            column_gap: COLUMN_GAP,
            min_grid_height: MIN_GRID_HEIGHT,
            export_path: DEFAULT_EXPORT_PATH.to_string(),
        }
    }
}

impl BasinConfig {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BasinConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by `RAIN_BASIN_CONFIG`, or defaults when the
    /// variable is unset. A file that fails to load is logged and replaced
    /// by defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded basin config from '{}'", path);
                config
            }
            Err(e) => {
                error!("Failed to load basin config '{}': {}", path, e);
                Self::default()
            }
        }
    }

    /// Width of a drawn column: one unit minus the gap.
    pub fn column_width(&self) -> u32 {
        self.unit - self.column_gap
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.unit == 0 {
            return Err(ConfigError::Invalid("unit must be at least 1".to_string()));
        }
        if self.column_gap >= self.unit {
            return Err(ConfigError::Invalid(format!(
                "column_gap ({}) must be smaller than unit ({})",
                self.column_gap, self.unit
            )));
        }
        Ok(())
    }
}

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur while loading a `BasinConfig`.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The file is not valid JSON for `BasinConfig`.
    Parse(serde_json::Error),
    /// The values parsed but cannot produce a drawable scene.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
