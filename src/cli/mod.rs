//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the theme store and settings.

pub mod config;
pub mod theme;

pub use config::show_config;
pub use theme::{handle_theme_command, ThemeCommands};
