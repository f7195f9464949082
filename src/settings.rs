//! Game settings and preferences
//!
//! Persisted separately from the high score. Load/save degrade gracefully:
//! a missing or unreadable file falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Play audio cues
    pub sound_enabled: bool,
    /// Start a gameplay recording automatically with each round
    pub auto_record: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            auto_record: false,
            master_volume: 1.0,
        }
    }
}

impl Settings {
    /// Default backing file, created in the working directory
    pub const DEFAULT_FILE: &'static str = "headball_settings.json";

    /// Load settings; missing or corrupt files use defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(err) => {
                    log::warn!("Corrupt settings file, using defaults: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged and dropped
    pub fn save(&self, path: impl AsRef<Path>) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path.as_ref(), json) {
                    log::warn!("Failed to save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to encode settings: {err}"),
        }
    }

    /// Flip the sound toggle, returning the new state
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.sound_enabled);
        assert!(!settings.auto_record);
        assert_eq!(settings.master_volume, 1.0);
    }

    #[test]
    fn test_toggle_sound() {
        let mut settings = Settings::default();
        assert!(!settings.toggle_sound());
        assert!(settings.toggle_sound());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("headball_settings_missing_test.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_round_trips_through_file() {
        let path = std::env::temp_dir().join("headball_settings_roundtrip_test.json");
        let mut settings = Settings::default();
        settings.sound_enabled = false;
        settings.auto_record = true;
        settings.save(&path);

        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }
}
