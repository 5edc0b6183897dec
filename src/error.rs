//! Custom error types for the onboarding wizard
//!
//! The wizard core never fails; these errors cover the ambient layers
//! (paths, settings, the preference file, the terminal).

use thiserror::Error;

/// The main error type for onboarding operations
#[derive(Error, Debug)]
pub enum OnboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl OnboardError {
    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// A terminal setup or teardown failure, with what was being attempted
    pub fn tui(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Tui(format!("{}: {}", context, err))
    }
}

impl From<std::io::Error> for OnboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OnboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for OnboardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for onboarding operations
pub type OnboardResult<T> = Result<T, OnboardError>;
