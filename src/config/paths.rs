//! Path management for the onboarding wizard
//!
//! ## Path Resolution Order
//!
//! 1. `ONBOARD_DATA_DIR` environment variable (if set)
//! 2. Platform config dir from `directories` (e.g. `~/.config/onboard`)
//! 3. `$HOME/.config/onboard`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::OnboardError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ONBOARD_DATA_DIR";

/// Manages all paths used by the wizard
#[derive(Debug, Clone)]
pub struct OnboardPaths {
    /// Base directory for all onboarding data
    base_dir: PathBuf,
}

impl OnboardPaths {
    /// Create a new OnboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration directory can be determined.
    pub fn new() -> Result<Self, OnboardError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create OnboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted preferences (key-value store)
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("preferences.json")
    }

    /// Get the log directory
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), OnboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OnboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| OnboardError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, OnboardError> {
    if let Some(dirs) = ProjectDirs::from("", "", "onboard") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("onboard"))
        .map_err(|_| OnboardError::Config("Could not determine a configuration directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.log_dir(), temp_dir.path().join("logs"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.preferences_file(),
            temp_dir.path().join("preferences.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let paths = OnboardPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
        assert!(paths.log_dir().exists());
    }
}
