//! Interaction timing configuration.
//!
//! The four values here drive every dwell and focus state machine. They are
//! usually compiled-in defaults, but scenes may override them from TOML.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;
use tracing::{info, warn};

/// Seconds of continuous gaze needed to select.
pub const DEFAULT_SELECTION_TIME: f32 = 2.0;
/// Seconds a panel holds at its focus pose once it has arrived.
pub const DEFAULT_FORWARD_TIME: f32 = 2.5;
/// Exponential smoothing rate for panel movement.
pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.0;
/// Distance under which a panel counts as arrived.
pub const DEFAULT_DISTANCE_FUZZ: f32 = 0.01;

/// Errors raised while loading or validating an [`InteractionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A timing or distance value was zero, negative, NaN or infinite.
    #[error("{field} must be a positive finite number (got {value})")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed validation.
        value: f32,
    },
    /// TOML could not be parsed into a config.
    #[error("failed to parse interaction config: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML could not be produced from a config.
    #[error("failed to serialize interaction config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Reading or writing the config file failed.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Named timing constants for dwell selection and focus animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Dwell threshold in seconds.
    pub selection_time: f32,
    /// Focus hold in seconds.
    pub forward_time: f32,
    /// Interpolation rate (fraction of remaining distance per second).
    pub movement_speed: f32,
    /// Arrival epsilon in world units.
    pub distance_fuzz: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            selection_time: DEFAULT_SELECTION_TIME,
            forward_time: DEFAULT_FORWARD_TIME,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            distance_fuzz: DEFAULT_DISTANCE_FUZZ,
        }
    }
}

impl InteractionConfig {
    /// Builder: set the dwell threshold.
    pub fn with_selection_time(mut self, seconds: f32) -> Self {
        self.selection_time = seconds;
        self
    }

    /// Builder: set the focus hold duration.
    pub fn with_forward_time(mut self, seconds: f32) -> Self {
        self.forward_time = seconds;
        self
    }

    /// Builder: set the interpolation rate.
    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    /// Builder: set the arrival epsilon.
    pub fn with_distance_fuzz(mut self, fuzz: f32) -> Self {
        self.distance_fuzz = fuzz;
        self
    }

    /// Check every field is a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("selection_time", self.selection_time),
            ("forward_time", self.forward_time),
            ("movement_speed", self.movement_speed),
            ("distance_fuzz", self.distance_fuzz),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: InteractionConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from `path`, falling back to defaults on any error.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded interaction config from {}", path.display());
                    config
                }
                Err(err) => {
                    warn!("Failed to load {}: {err}. Using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save the config as pretty TOML, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}
