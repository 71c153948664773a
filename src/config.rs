// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for teddy-chat
//!
//! Handles loading and saving settings from ~/.teddy-chat/settings.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Main settings structure, stored in ~/.teddy-chat/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Chat session configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Configuration for chat sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Assistant query endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Provider selected for new sessions
    #[serde(default = "default_provider")]
    pub default_provider: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_provider: default_provider(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:3000/api/ai-query".to_string()
}

fn default_provider() -> String {
    "claude".to_string()
}

impl Settings {
    /// The teddy-chat home directory
    pub fn home() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".teddy-chat")
    }

    /// Get the default settings file path
    pub fn default_path() -> PathBuf {
        Self::home().join("settings.json")
    }

    /// Load settings from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.chat.endpoint, "http://localhost:3000/api/ai-query");
        assert_eq!(settings.chat.default_provider, "claude");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.chat.default_provider, "claude");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"chat":{"default_provider":"gemini"}}"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.chat.default_provider, "gemini");
        assert_eq!(settings.chat.endpoint, "http://localhost:3000/api/ai-query");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.chat.endpoint = "https://teddy.example/api/ai-query".to_string();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.chat.endpoint, "https://teddy.example/api/ai-query");
    }
}
