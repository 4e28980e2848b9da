// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use search_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.zoom_step = Some(0.25);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::newtypes::ZoomStep;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SearchLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Scale increment for zoom in/out commands.
    #[serde(default)]
    pub zoom_step: Option<f32>,
    /// Scale increment per wheel notch.
    #[serde(default)]
    pub wheel_step: Option<f32>,
    /// Whether a double-click on the image resets zoom.
    #[serde(default)]
    pub double_click_reset: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            wheel_step: Some(DEFAULT_WHEEL_STEP),
            double_click_reset: Some(DEFAULT_DOUBLE_CLICK_RESET),
        }
    }
}

impl Config {
    /// Validated zoom step, falling back to the default when unset.
    #[must_use]
    pub fn zoom_step(&self) -> ZoomStep {
        ZoomStep::new(self.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP))
    }

    /// Validated wheel step, falling back to the default when unset.
    #[must_use]
    pub fn wheel_step(&self) -> ZoomStep {
        ZoomStep::new(self.wheel_step.unwrap_or(DEFAULT_WHEEL_STEP))
    }

    #[must_use]
    pub fn double_click_reset(&self) -> bool {
        self.double_click_reset.unwrap_or(DEFAULT_DOUBLE_CLICK_RESET)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns the default configuration when no file exists yet.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Unparsable content yields the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Writes a configuration file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
