//! Application configuration module
//!
//! Settings are persisted with `confy` in the OS-specific config directory.
//! Every field has a serde default so older config files keep loading.

use crate::constant::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_AUTHOR};
use crate::diff::DiffStrategy;
use crate::view_state::{ViewOptions, ViewState};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the application data directory
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// View state to start with: the last session's, or a fresh one with the default toggles
    pub fn initial_view_state(&self) -> ViewState {
        self.settings
            .last_view
            .clone()
            .unwrap_or_else(|| ViewState::with_options(self.settings.view))
    }

    /// Remember the view state for the next session
    pub fn remember_view(&mut self, state: &ViewState) {
        self.settings.last_view = Some(state.clone());
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Using default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// "light" or "dark"
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Font size for diff text
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// System font families to try first, e.g. for CJK content.
    /// Empty means the platform defaults.
    #[serde(default)]
    pub preferred_fonts: Vec<String>,

    /// Author stamped on imported versions
    #[serde(default = "default_author")]
    pub author: String,

    /// Offer the bundled sample versions while nothing has been saved
    #[serde(default = "default_true")]
    pub seed_samples: bool,

    #[serde(default)]
    pub strategy: DiffStrategy,

    /// Toggles for a fresh session
    #[serde(default)]
    pub view: ViewOptions,

    /// Selection and toggles at last exit
    #[serde(default)]
    pub last_view: Option<ViewState>,

    /// One of trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_font_size() -> f32 {
    14.0
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_size: default_font_size(),
            preferred_fonts: Vec::new(),
            author: default_author(),
            seed_samples: true,
            strategy: DiffStrategy::default(),
            view: ViewOptions::default(),
            last_view: None,
            log_level: default_log_level(),
        }
    }
}
