//! Game settings
//!
//! Fixed when a world is created. Loaded from an optional JSON file; any
//! field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{HEIGHT, WIDTH};
use crate::sim::{Difficulty, PlayArea};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Play area ===
    pub width: f64,
    pub height: f64,

    // === Simulation ===
    /// Fixed RNG seed for reproducible runs (random when unset)
    pub seed: Option<u64>,
    /// Let hard-mode enemies actually home faster (off: always 2 units/tick)
    pub scale_enemy_speed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            width: WIDTH,
            height: HEIGHT,
            seed: None,
            scale_enemy_speed: false,
        }
    }
}

impl Settings {
    /// Default settings at the given difficulty
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn play_area(&self) -> PlayArea {
        PlayArea::new(self.width, self.height)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}, using default settings", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.difficulty, Difficulty::Normal);
        assert_eq!(s.play_area(), PlayArea::new(800.0, 600.0));
        assert_eq!(s.seed, None);
        assert!(!s.scale_enemy_speed);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{"difficulty": "hard", "seed": 42}"#).unwrap();
        assert_eq!(s.difficulty, Difficulty::Hard);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.width, 800.0);
        assert_eq!(s.height, 600.0);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Settings::from_json(r#"{"difficulty": "insane"}"#).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = Settings::from_difficulty(Difficulty::Easy);
        s.scale_enemy_speed = true;
        let json = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let s = Settings::load(Path::new("/nonexistent/space-dodge/settings.json"));
        assert_eq!(s, Settings::default());
    }
}
