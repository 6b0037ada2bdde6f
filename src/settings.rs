//! Game settings
//!
//! Read from `brick_breaker.json` in the working directory. Every field is
//! optional in the file; missing fields take their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Playfield;
use crate::consts::{MAX_FRAME_DT, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Why settings could not be read
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "could not read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
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
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Timing ===
    /// Longest frame delta fed to the simulation (seconds)
    pub max_frame_dt: f32,
    /// Frames per second of the headless clock
    pub frame_rate: u32,
    /// Frames a headless run lasts
    pub frames: u32,

    // === Autopilot ===
    /// RNG seed for reproducible runs
    pub seed: u64,
    /// Frames a button stays on screen before the autopilot clicks it
    pub autopilot_reaction_frames: u32,
    /// Chance per aim change that the autopilot stops following the ball
    pub autopilot_fumble_chance: f64,

    // === Debug ===
    /// Log the final round as JSON
    pub snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            max_frame_dt: MAX_FRAME_DT,
            frame_rate: 60,
            frames: 3600,

            seed: 0x5eed,
            autopilot_reaction_frames: 20,
            autopilot_fumble_chance: 0.02,

            snapshot: false,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "brick_breaker.json";

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document() {
        let settings = Settings::from_json(r#"{ "playfield_width": 1024, "seed": 9 }"#).unwrap();
        assert_eq!(settings.playfield(), Playfield::new(1024.0, 600.0));
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.frame_rate, 60);
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid settings"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/brick_breaker.json");
        assert_eq!(settings, Settings::default());
        assert!(matches!(
            Settings::load("/nonexistent/brick_breaker.json"),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let path = std::env::temp_dir().join(format!("brick_breaker_{}.json", std::process::id()));
        std::fs::write(&path, "[1, 2").unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        std::fs::write(&path, Settings { frames: 5, ..Default::default() }.to_json().unwrap()).unwrap();
        assert_eq!(Settings::load_or_default(&path).frames, 5);

        std::fs::remove_file(&path).unwrap();
    }
}
