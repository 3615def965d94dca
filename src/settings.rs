//! User settings stored as settings.json in the app data directory

use crate::constants::WAITLIST_ENDPOINT;
use crate::types::DisplayMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Appearance, read once at startup
    pub display_mode: DisplayMode,

    // Overrides the Formspark form URL (staging forms, local testing)
    pub endpoint: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            display_mode: DisplayMode::Dark,
            endpoint: None,
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

    /// Configured endpoint, falling back to the production form. Blank overrides are ignored.
    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(WAITLIST_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(800.0),
            display_mode: DisplayMode::Light,
            endpoint: Some("http://localhost:9000/form".into()),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"display_mode":"light"}"#).unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.display_mode, DisplayMode::Light);
        assert_eq!(settings.window_w, None);
    }

    #[test]
    fn endpoint_falls_back_to_production() {
        let mut settings = Settings::default();
        assert_eq!(settings.endpoint_or_default(), WAITLIST_ENDPOINT);
        settings.endpoint = Some("   ".into());
        assert_eq!(settings.endpoint_or_default(), WAITLIST_ENDPOINT);
        settings.endpoint = Some(" http://localhost:9000 ".into());
        assert_eq!(settings.endpoint_or_default(), "http://localhost:9000");
    }
}
