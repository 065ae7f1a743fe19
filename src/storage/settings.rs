//! Settings storage
//!
//! Manages persistence of user preferences and application settings.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default chat backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the chat backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// UI theme: "dark" or "light"
    pub theme: String,
    /// Font size: "small", "medium", or "large"
    pub font_size: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            theme: "dark".to_string(),
            font_size: "medium".to_string(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Normalizes the base URL and falls back to defaults for out-of-range
    /// values so a hand-edited settings file cannot break the app.
    pub fn validate(&mut self) {
        let url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.api_base_url = if url.is_empty() {
            default_api_base_url()
        } else {
            url
        };

        if self.theme != "dark" && self.theme != "light" {
            self.theme = "dark".to_string();
        }

        if !["small", "medium", "large"].contains(&self.font_size.as_str()) {
            self.font_size = "medium".to_string();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match load_settings_internal() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

fn load_settings_internal() -> Result<AppSettings, StorageError> {
    let path = get_settings_path()?;

    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    load_settings_from(&path)
}

fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();
    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.font_size, "medium");
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.api_base_url = "http://example.com:8080/".to_string();
        settings.validate();
        assert_eq!(settings.api_base_url, "http://example.com:8080");

        settings.api_base_url = "   ".to_string();
        settings.validate();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);

        settings.theme = "solarized".to_string();
        settings.validate();
        assert_eq!(settings.theme, "dark");

        settings.font_size = "huge".to_string();
        settings.validate();
        assert_eq!(settings.font_size, "medium");
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();

        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings.api_base_url, deserialized.api_base_url);
        assert_eq!(settings.theme, deserialized.theme);
        assert_eq!(settings.font_size, deserialized.font_size);
    }

    #[test]
    fn test_settings_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.api_base_url = "http://10.0.0.5:3000".to_string();
        save_settings_to(&path, &settings).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.api_base_url, "http://10.0.0.5:3000");
        assert_eq!(loaded.theme, "dark");
    }

    #[test]
    fn test_missing_url_field_defaults() {
        let loaded: AppSettings =
            serde_json::from_str(r#"{"theme":"light","font_size":"small"}"#).unwrap();
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(loaded.theme, "light");
    }
}
