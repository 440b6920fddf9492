// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Three preferences are persisted: the theme mode, whether a backup copy of the
//! original file is kept when an edit is saved, and whether edited photos are
//! written at high JPEG quality.

use crate::error::Result;
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PhotoLens";

/// JPEG quality used when `high_quality_save` is enabled.
pub const HIGH_JPEG_QUALITY: u8 = 95;
/// JPEG quality used otherwise.
pub const STANDARD_JPEG_QUALITY: u8 = 80;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub auto_backup: Option<bool>,
    #[serde(default)]
    pub high_quality_save: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            auto_backup: Some(false),
            high_quality_save: Some(true),
        }
    }
}

impl Config {
    /// Returns the JPEG quality edited photos should be saved with.
    #[must_use]
    pub fn jpeg_quality(&self) -> u8 {
        if self.high_quality_save.unwrap_or(true) {
            HIGH_JPEG_QUALITY
        } else {
            STANDARD_JPEG_QUALITY
        }
    }

    /// Returns whether a backup of the original file is kept when saving edits.
    #[must_use]
    pub fn auto_backup_enabled(&self) -> bool {
        self.auto_backup.unwrap_or(false)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
