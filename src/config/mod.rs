// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use image_agl::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the elevation lookup at a directory of SRTM tiles
//! config.dem_dir = Some(PathBuf::from("/data/srtm"));
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ImageAgl";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding SRTM `.hgt` tiles.
    #[serde(default)]
    pub dem_dir: Option<PathBuf>,
    /// Bilinear interpolation between elevation samples.
    #[serde(default)]
    pub interpolate: Option<bool>,
    /// Log branch decisions and intermediate values.
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dem_dir: None,
            interpolate: Some(defaults::DEFAULT_INTERPOLATE),
            verbose: Some(defaults::DEFAULT_VERBOSE),
        }
    }
}

impl Config {
    /// Whether elevation samples are interpolated.
    #[must_use]
    pub fn interpolate(&self) -> bool {
        self.interpolate.unwrap_or(defaults::DEFAULT_INTERPOLATE)
    }

    /// Whether verbose diagnostics are enabled.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(defaults::DEFAULT_VERBOSE)
    }
}

/// Location of `settings.toml` in the platform configuration directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Loads the settings file from [`default_config_path`], or defaults when
/// there is none.
pub fn load() -> Result<Config> {
    match default_config_path().filter(|path| path.is_file()) {
        Some(path) => load_from_path(&path),
        None => {
            debug!("No settings file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Writes `config` to [`default_config_path`]. Does nothing on platforms
/// without a configuration directory.
pub fn save(config: &Config) -> Result<()> {
    default_config_path().map_or(Ok(()), |path| save_to_path(config, &path))
}

/// Loads a settings file. A file that is not valid TOML is reported and
/// loads as defaults; an unreadable file is an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => {
            debug!(path = %path.display(), "Loaded settings");
            Ok(config)
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid settings file, using defaults: {err}");
            Ok(Config::default())
        }
    }
}

/// Writes a settings file, creating its parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
