//! User settings stored as settings.json in the app data directory

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Audio
    pub play_sound: bool,

    // Roll straight into the next interval when one finishes
    pub auto_start_next: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            play_sound: true,
            auto_start_next: true,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_partial_json() {
        let settings: Settings = serde_json::from_str(r#"{"play_sound": false}"#).unwrap();
        assert!(!settings.play_sound);
        assert!(settings.auto_start_next);
        assert_eq!(settings.window_x, None);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("focus-ring-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(400.0),
            window_h: Some(520.0),
            play_sound: false,
            auto_start_next: false,
        };
        settings.save(&dir);
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_w, Some(400.0));
        assert!(!loaded.play_sound);
        assert!(!loaded.auto_start_next);
        std::fs::remove_dir_all(&dir).ok();
    }
}
