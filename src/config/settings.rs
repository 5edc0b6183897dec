//! User settings for the onboarding wizard
//!
//! Settings cover the terminal shell and logging. The dark-mode flag lives
//! in the preference store.

use serde::{Deserialize, Serialize};

use super::paths::OnboardPaths;
use crate::error::OnboardError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default log filter when `ONBOARD_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Show the password length hint under the password field
    #[serde(default = "default_show_password_hint")]
    pub show_password_hint: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_show_password_hint() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate_ms(),
            show_password_hint: default_show_password_hint(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnboardPaths) -> Result<Self, OnboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                OnboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OnboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardPaths) -> Result<(), OnboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            OnboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| OnboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
