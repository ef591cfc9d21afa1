//! Menu configuration loaded from an external RON file.
//!
//! Allows tweaking timings, levels and asset paths without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::DataLoadError;
use crate::scene::SAMPLE_SCENE;

/// Where the menu config lives, relative to the working directory.
pub const MENU_CONFIG_PATH: &str = "assets/data/ui/main_menu.ron";

/// Menu configuration loaded from assets/data/ui/main_menu.ron.
#[derive(Resource, Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    /// Scene requested by the Start button.
    pub start_scene: String,
    /// Delay between a click and its action, in seconds.
    pub action_delay_secs: f32,
    /// Fixed level of the click sound channel.
    pub click_volume: f32,
    /// Music volume used when no slider is wired up.
    pub default_music_volume: f32,
    /// Asset path of the click clip. `None` leaves clicks silent.
    pub click_sound: Option<String>,
    /// Asset path of the menu music. `None` spawns no music player.
    pub music_track: Option<String>,
    /// Logged when the Quit sequence requests exit.
    pub quit_notice: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            start_scene: SAMPLE_SCENE.to_string(),
            action_delay_secs: 1.0,
            click_volume: 0.2,
            default_music_volume: 0.5,
            click_sound: None,
            music_track: None,
            quit_notice: "Exiting Game...".to_string(),
        }
    }
}

impl MenuConfig {
    /// The click-to-action delay as a `Duration`.
    ///
    /// Values too large to represent fall back to the default delay.
    pub fn action_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.action_delay_secs.max(0.0)).unwrap_or_else(|e| {
            let fallback = Self::default().action_delay_secs;
            warn!(
                "Invalid action delay {}: {}. Using {}s.",
                self.action_delay_secs, e, fallback
            );
            Duration::from_secs_f32(fallback)
        })
    }

    /// Parse a config from RON text. `path` is only used in errors.
    pub fn from_ron_str(contents: &str, path: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// Read and parse a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;

        Self::from_ron_str(&contents, &display)
    }

    /// Load the menu config, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::from_path(MENU_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded menu config from {}", MENU_CONFIG_PATH);
                config
            }
            Err(e @ DataLoadError::FileNotFound(_)) => {
                warn!("{}. Using default menu config.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using default menu config.", e);
                Self::default()
            }
        }
    }
}

/// System to load the menu config at startup.
pub fn load_menu_config(mut commands: Commands) {
    commands.insert_resource(MenuConfig::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_menu_behaviour() {
        let config = MenuConfig::default();
        assert_eq!(config.start_scene, "SampleScene");
        assert_eq!(config.action_delay(), Duration::from_secs(1));
        assert_eq!(config.click_volume, 0.2);
        assert_eq!(config.default_music_volume, 0.5);
        assert_eq!(config.quit_notice, "Exiting Game...");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = MenuConfig::from_ron_str(
            r#"(start_scene: "Arena", click_sound: Some("audio/tick.wav"))"#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.start_scene, "Arena");
        assert_eq!(config.click_sound.as_deref(), Some("audio/tick.wav"));
        assert_eq!(config.action_delay_secs, 1.0);
        assert_eq!(config.music_track, MenuConfig::default().music_track);
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let err = MenuConfig::from_ron_str("(start_scene: 12", "broken.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { ref path, .. } if path == "broken.ron"));
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = MenuConfig::from_path("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }

    #[test]
    fn shipped_config_parses() {
        let config = MenuConfig::from_path(
            Path::new(env!("CARGO_MANIFEST_DIR")).join(MENU_CONFIG_PATH),
        )
        .unwrap();
        assert_eq!(config.start_scene, "SampleScene");
    }

    #[test]
    fn huge_delay_from_file_falls_back_to_default() {
        let config = MenuConfig::from_ron_str("(action_delay_secs: 1e20)", "inline").unwrap();
        assert_eq!(config.action_delay(), Duration::from_secs(1));
    }

    #[test]
    fn infinite_or_nan_delay_does_not_panic() {
        let infinite = MenuConfig {
            action_delay_secs: f32::INFINITY,
            ..default()
        };
        assert_eq!(infinite.action_delay(), Duration::from_secs(1));

        let nan = MenuConfig {
            action_delay_secs: f32::NAN,
            ..default()
        };
        assert_eq!(nan.action_delay(), Duration::ZERO);
    }

    #[test]
    fn no_audio_assets_by_default() {
        let config = MenuConfig::default();
        assert_eq!(config.click_sound, None);
        assert_eq!(config.music_track, None);
    }

    #[test]
    fn negative_delay_is_treated_as_zero() {
        let config = MenuConfig {
            action_delay_secs: -3.0,
            ..default()
        };
        assert_eq!(config.action_delay(), Duration::ZERO);
    }
}
