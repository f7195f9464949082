//! Persisted best score
//!
//! A single best-score value, loaded at init and written back only when a
//! finished round beats it. Persistence failures are logged and otherwise
//! ignored; they never affect the simulation.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Best score with its backing file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScore {
    pub score: u32,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl HighScore {
    /// Default backing file, created in the working directory
    pub const DEFAULT_FILE: &'static str = "headball_highscore.json";

    /// Load from the given file; missing or corrupt files start fresh
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut loaded = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HighScore>(&json) {
                Ok(scores) => {
                    log::info!("Loaded high score: {}", scores.score);
                    scores
                }
                Err(err) => {
                    log::warn!("Corrupt high score file, starting fresh: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
        };
        loaded.path = Some(path);
        loaded
    }

    /// Unbacked store for tests and headless runs
    pub fn in_memory(score: u32) -> Self {
        Self { score, path: None }
    }

    /// Record a finished round. Persists only when the score improves;
    /// returns true when a new best was set.
    pub fn submit(&mut self, score: u32) -> bool {
        if score <= self.score {
            return false;
        }
        self.score = score;
        self.save();
        true
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save high score: {err}");
                } else {
                    log::info!("High score saved: {}", self.score);
                }
            }
            Err(err) => log::warn!("Failed to encode high score: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_keeps_best_only() {
        let mut best = HighScore::in_memory(5);
        assert!(!best.submit(3));
        assert_eq!(best.score, 5);
        assert!(!best.submit(5));
        assert_eq!(best.score, 5);
        assert!(best.submit(7));
        assert_eq!(best.score, 7);
    }

    #[test]
    fn test_load_missing_file_starts_fresh() {
        let path = std::env::temp_dir().join("headball_highscore_missing_test.json");
        let _ = std::fs::remove_file(&path);
        let best = HighScore::load(&path);
        assert_eq!(best.score, 0);
    }

    #[test]
    fn test_round_trips_through_file() {
        let path = std::env::temp_dir().join("headball_highscore_roundtrip_test.json");
        let _ = std::fs::remove_file(&path);

        let mut best = HighScore::load(&path);
        assert!(best.submit(12));

        let reloaded = HighScore::load(&path);
        assert_eq!(reloaded.score, 12);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let path = std::env::temp_dir().join("headball_highscore_corrupt_test.json");
        std::fs::write(&path, "not json").unwrap();
        let best = HighScore::load(&path);
        assert_eq!(best.score, 0);
        let _ = std::fs::remove_file(&path);
    }
}
