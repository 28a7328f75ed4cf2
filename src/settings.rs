//! Game settings and preferences
//!
//! Read once at startup from a JSON file. A missing or broken file is not
//! fatal: the problem is logged and defaults are used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub window_title: String,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
    /// Directory holding bg.png, ground.png, bird1-3.png, pipe.png,
    /// restart.png and optionally font.ttf. Procedural art when absent.
    pub assets_dir: Option<PathBuf>,
    /// Show FPS counter
    pub show_fps: bool,
    /// Gameplay balance overrides
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Flappy Bird".to_string(),
            seed: None,
            assets_dir: None,
            show_fps: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Default settings file, relative to the working directory
    const FILE_NAME: &'static str = "flappy.json";

    /// Environment variable overriding the settings path
    pub const PATH_ENV: &'static str = "FLAPPY_SETTINGS";

    /// Path the settings are read from
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::FILE_NAME))
    }

    /// Load settings from the default path
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Seed for this run: the configured one, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
