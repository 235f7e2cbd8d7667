//! Game settings
//!
//! Loaded from an optional JSON file at start-up. Missing fields take their
//! defaults, so a file only needs the values it changes.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Problem loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (None = pick one at start-up)
    pub seed: Option<u64>,

    // === Enemies ===
    /// Bugs created at game start
    pub enemy_count: usize,
    /// Pixels per second per unit of bug speed
    pub enemy_speed_scale: f32,
    /// Bugs wrap once they reach this x
    pub wrap_x: f32,

    // === Player ===
    /// Pick a new character skin on every reset
    pub random_skins: bool,

    // === Frame timing (front end) ===
    /// Longest frame the simulation will be asked to cover, in seconds
    pub max_frame_dt: f32,
    /// Target frame period in milliseconds
    pub frame_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            enemy_count: ENEMY_COUNT,
            enemy_speed_scale: ENEMY_SPEED_SCALE,
            wrap_x: ENEMY_WRAP_X,

            random_skins: true,

            max_frame_dt: 0.1,
            frame_ms: 16,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.enemy_count == 0 {
            return Err(SettingsError::Invalid("enemy_count must be at least 1".into()));
        }
        if !(self.enemy_speed_scale.is_finite() && self.enemy_speed_scale > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "enemy_speed_scale must be positive, got {}",
                self.enemy_speed_scale
            )));
        }
        if !(self.wrap_x > 0.0 && self.wrap_x <= -ENEMY_MIN_X) {
            return Err(SettingsError::Invalid(format!(
                "wrap_x must be in (0, {}], got {}",
                -ENEMY_MIN_X,
                self.wrap_x
            )));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        if self.frame_ms == 0 {
            return Err(SettingsError::Invalid("frame_ms must be at least 1".into()));
        }
        Ok(())
    }

    /// Clamp a measured frame time to what one tick may cover
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, self.max_frame_dt)
        } else {
            0.0
        }
    }
}
