//! Game settings
//!
//! Persisted as JSON next to the best-score file. Screen size is fixed and
//! not part of the settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FPS;
use crate::persistence::{DEFAULT_FILE_NAME, beside_executable};

/// Default settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write settings: {0}")]
    Io(#[from] io::Error),
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the best score is kept
    pub best_score_path: PathBuf,
    /// Fixed seed for the gap generator; random when absent
    pub seed: Option<u64>,
    /// Driver frame rate
    pub fps: u32,
    /// Frames the headless driver runs before exiting
    pub demo_frames: u64,
    /// Let the built-in pilot press the keys
    pub autopilot: bool,
    /// Pace the headless driver to `fps` instead of running flat out
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            best_score_path: beside_executable(DEFAULT_FILE_NAME),
            seed: None,
            fps: FPS,
            demo_frames: 60 * 60,
            autopilot: true,
            realtime: false,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults on a missing or bad file
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(error) => {
                log::warn!("Could not read {}: {}", path.display(), error);
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(error) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), error);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Frame rate actually used by the driver (never zero)
    pub fn effective_fps(&self) -> u32 {
        self.fps.max(1)
    }
}
