use super::keymap::KeyConfig;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub keys: KeyConfig,
    pub theme: PaletteType,
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("cmdpal");
        path.push("config.toml");
        path
    })
}

/// Reads `~/.config/cmdpal/config.toml`, falling back to defaults.
pub fn load_settings() -> Settings {
    match get_config_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "Failed to read settings");
            return Settings::default();
        }
    };
    toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = ?path, error = %e, "Malformed settings, using defaults");
        Settings::default()
    })
}
