//! Host settings and preferences
//!
//! Loaded from an optional JSON file. Physics is not configurable; these only
//! shape how a host runs and presents the game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SUBSTEPS;
use crate::platform::KeyBindings;
use crate::renderer::DrawOptions;

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for a reproducible game (time-based when `None`)
    pub seed: Option<u64>,
    /// Host frames to run in headless mode
    pub frames: u32,
    /// Host steers the player paddle toward the ball
    pub autoplay: bool,
    /// Cap on simulation steps per host frame
    pub max_substeps: u32,

    // === HUD ===
    /// Show the controls hint bar
    pub show_controls_hint: bool,
    /// Dim the board while paused
    pub pause_veil: bool,

    /// Print the last snapshot as JSON when a headless run ends
    pub dump_final_snapshot: bool,

    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frames: 60 * 60,
            autoplay: true,
            max_substeps: MAX_SUBSTEPS,

            show_controls_hint: true,
            pause_veil: true,

            dump_final_snapshot: false,

            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            show_controls_hint: self.show_controls_hint,
            pause_veil: self.pause_veil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "autoplay": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.autoplay);
        assert_eq!(settings.max_substeps, MAX_SUBSTEPS);
        assert_eq!(settings.bindings, KeyBindings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            frames: 10,
            dump_final_snapshot: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json(r#"{ "frames": "lots" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/solo-pong.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_draw_options() {
        let settings = Settings {
            show_controls_hint: false,
            ..Default::default()
        };
        let options = settings.draw_options();
        assert!(!options.show_controls_hint);
        assert!(options.pause_veil);
    }
}
