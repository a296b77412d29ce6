// SPDX-License-Identifier: MPL-2.0
//! Player configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use video_showcase::config::{self, PlayerConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.autoplay = true;
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert!(loaded.autoplay);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::video::{ControlsTimeout, SeekStep};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// How much of the resource the media element fetches before playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preload {
    None,
    #[default]
    Metadata,
    Auto,
}

/// Behaviour of a player session, applied when the modal opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub muted: bool,
    pub preload: Preload,
    pub plays_inline: bool,
    pub disable_picture_in_picture: bool,
    /// Idle time before the controls hide during playback.
    pub controls_timeout: ControlsTimeout,
    /// Skip distance for skip buttons and arrow keys.
    pub seek_step: SeekStep,
    /// Volume change per arrow key press.
    pub volume_step: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            looping: false,
            muted: false,
            preload: Preload::Metadata,
            plays_inline: true,
            disable_picture_in_picture: false,
            controls_timeout: ControlsTimeout::default(),
            seek_step: SeekStep::default(),
            volume_step: VOLUME_STEP,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<PlayerConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PlayerConfig::default())
}

pub fn save(config: &PlayerConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. An unparsable file yields the defaults.
pub fn load_from_path(path: &Path) -> Result<PlayerConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(PlayerConfig::default())
        }
    }
}

pub fn save_to_path(config: &PlayerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = PlayerConfig {
            autoplay: true,
            looping: true,
            seek_step: SeekStep::new(5.0),
            ..PlayerConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, PlayerConfig::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "autoplay = true\nloop = true\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert!(loaded.autoplay);
        assert!(loaded.looping);
        assert_eq!(loaded.preload, Preload::Metadata);
        assert_eq!(loaded.controls_timeout.value(), DEFAULT_CONTROLS_TIMEOUT_SECS);
    }

    #[test]
    fn default_config_matches_player_defaults() {
        let config = PlayerConfig::default();
        assert!(!config.autoplay);
        assert!(!config.looping);
        assert!(!config.muted);
        assert!(config.plays_inline);
        assert_eq!(config.preload, Preload::Metadata);
        assert_eq!(config.seek_step.value(), DEFAULT_SEEK_STEP_SECS);
        assert_eq!(config.volume_step, VOLUME_STEP);
    }
}
