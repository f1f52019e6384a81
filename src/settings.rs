//! User settings persistence.
//!
//! This module handles loading and saving viewer preferences across sessions.
//! Stepper position is not persisted; every session starts at the beginning
//! of the story.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::state::{DetailMode, FontScale};

/// User settings that persist across sessions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Market data file opened last
    #[serde(default)]
    pub last_data_file: Option<PathBuf>,
    /// Story file opened last (`None` = built-in story)
    #[serde(default)]
    pub last_story_file: Option<PathBuf>,
    /// What the detail button does
    #[serde(default)]
    pub detail_mode: DetailMode,
    #[serde(default)]
    pub font_scale: FontScale,
}

fn default_version() -> u32 {
    1
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            last_data_file: None,
            last_story_file: None,
            detail_mode: DetailMode::default(),
            font_scale: FontScale::default(),
        }
    }
}

impl UserSettings {
    /// Get the config directory path for LunaStory
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("LunaStory"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("LunaStory"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("lunastory"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        match Self::get_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable settings file {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::get_settings_path().context("Could not determine config directory")?;
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings file {:?}", path))?;

        Ok(())
    }
}
