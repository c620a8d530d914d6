//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved whenever the filter
//! state changes, so the next run restores the last search.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the Rundbok backend.
    pub api_base_url: String,

    /// Bearer token for publishing and editing listings. Absent until the
    /// user signs in.
    pub auth_token: Option<String>,

    /// Location query-string of the last search, restored at startup.
    pub last_search: String,

    /// Override for where to persist these settings. Used by tests; the
    /// default is the platform config directory.
    #[serde(skip)]
    pub storage_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.rundbok.se".to_string(),
            auth_token: None,
            last_search: String::new(),
            storage_path: None,
        }
    }
}

impl Settings {
    /// Load settings from the default path; a missing or corrupt file
    /// degrades to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the configured path.
    pub fn save(&self) -> Result<(), String> {
        match &self.storage_path {
            Some(path) => self.save_to(path),
            None => self.save_to(&Self::config_path()),
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("se", "Rundbok", "Rundbok")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}
