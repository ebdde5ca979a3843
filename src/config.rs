//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default event poll interval in milliseconds
const DEFAULT_TICK_RATE_MS: u64 = 100;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: Option<u64>,
    /// Capture mouse events (click-to-focus, click-to-submit)
    pub mouse_capture: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "cadastro", "cadastro-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Event poll interval with default applied
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS))
    }

    /// Whether mouse capture is enabled (default on)
    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }
}
