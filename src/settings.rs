//! Driver settings and preferences
//!
//! Persisted as JSON next to the binary (or wherever `--settings` points).
//! Every field has a default, so a settings file only needs the values it
//! wants to change.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::{Tuning, TuningError};

/// Default settings file name
pub const SETTINGS_FILE: &str = "catch-the-eggs.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("max_dt must be a positive number of seconds, got {0}")]
    MaxDelta(f32),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target time between frames (milliseconds)
    pub frame_ms: u64,
    /// Longest delta passed to a single tick (seconds)
    pub max_dt: f32,
    /// Fixed base seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Let the computer steer the basket
    pub autopilot: bool,
    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_ms: 16,
            max_dt: 0.1,
            seed: None,
            autopilot: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a file, falling back to defaults when it does
    /// not exist. A file that exists but is broken is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // A non-positive cap would stop the frame clock
        if !self.max_dt.is_finite() || self.max_dt <= 0.0 {
            return Err(ConfigError::MaxDelta(self.max_dt));
        }
        self.tuning.validate()?;
        Ok(())
    }

    /// Frame interval as a `Duration`
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json() {
        let settings =
            Settings::from_json(r#"{ "seed": 7, "tuning": { "chicken_count": 3 } }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.chicken_count, 3);
        assert_eq!(settings.frame_ms, 16);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let err = Settings::from_json(r#"{ "tuning": { "spawn_interval": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Tuning(TuningError::NotPositive("spawn_interval"))));
    }

    #[test]
    fn test_non_positive_max_dt_is_rejected() {
        let err = Settings::from_json(r#"{ "max_dt": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::MaxDelta(dt) if dt == 0.0));

        let mut settings = Settings::default();
        settings.max_dt = -0.5;
        assert!(matches!(settings.validate(), Err(ConfigError::MaxDelta(_))));
    }

    #[test]
    fn test_bad_tuning_in_file_is_rejected_not_panicking() {
        let err = Settings::from_json(
            r#"{ "tuning": { "spawn_table": { "golden": 4294967295, "blue": 1 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Tuning(TuningError::SpawnWeightsOverflow(_))
        ));

        let err = Settings::from_json(
            r#"{ "tuning": { "item_speed_jitter": -1.0, "enlarged_basket_width": 40.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Tuning(TuningError::Negative("item_speed_jitter"))));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("catch-the-eggs-does-not-exist.json");
        let settings = Settings::load_or_default(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("catch-the-eggs-{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.autopilot = true;
        settings.tuning.chicken_count = 2;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }
}
