//! Theme CLI commands
//!
//! Inspect and change the persisted dark-mode preference without opening
//! the TUI.

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::models::Theme;
use crate::theme::ThemeHandle;

/// Theme subcommands
#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the active theme and where it came from
    Show,
    /// Persist a theme preference
    Set {
        /// Theme to use (light or dark)
        theme: String,
    },
    /// Flip between light and dark
    Toggle,
    /// Forget the stored preference and follow the environment again
    Clear,
}

/// Handle a theme command
pub fn handle_theme_command(theme: &ThemeHandle, cmd: ThemeCommands) -> Result<()> {
    match cmd {
        ThemeCommands::Show => {
            let (dark, source) = theme.with(|store| (store.get_preference(), store.source()));
            println!("Theme: {} ({})", mode_name(dark), source);
        }
        ThemeCommands::Set { theme: value } => {
            let Some(choice) = Theme::parse(&value) else {
                bail!("Unknown theme '{}'. Expected 'light' or 'dark'.", value);
            };
            theme.set_dark(choice.is_dark());
            println!("Theme set to {}", mode_name(choice.is_dark()));
        }
        ThemeCommands::Toggle => {
            let dark = theme.toggle();
            println!("Theme set to {}", mode_name(dark));
        }
        ThemeCommands::Clear => {
            let (dark, source) = theme.with(|store| {
                store.clear();
                (store.get_preference(), store.source())
            });
            println!("Stored preference cleared");
            println!("Theme: {} ({})", mode_name(dark), source);
        }
    }

    Ok(())
}

fn mode_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::theme::{FixedScheme, PreferenceSource, RootFlag, ThemeStore};

    fn handle() -> ThemeHandle {
        ThemeHandle::new(ThemeStore::new(
            Box::new(MemoryStore::new()),
            Box::new(FixedScheme(false)),
            RootFlag::default(),
        ))
    }

    #[test]
    fn test_set_and_clear() {
        let theme = handle();

        handle_theme_command(&theme, ThemeCommands::Set { theme: "dark".into() }).unwrap();
        assert!(theme.is_dark());
        assert_eq!(theme.with(|s| s.source()), PreferenceSource::Stored);

        handle_theme_command(&theme, ThemeCommands::Clear).unwrap();
        assert!(!theme.is_dark());
        assert_eq!(theme.with(|s| s.source()), PreferenceSource::Environment);
    }

    #[test]
    fn test_set_rejects_unknown_theme() {
        let theme = handle();
        let result = handle_theme_command(&theme, ThemeCommands::Set { theme: "blue".into() });
        assert!(result.is_err());
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_toggle() {
        let theme = handle();
        handle_theme_command(&theme, ThemeCommands::Toggle).unwrap();
        assert!(theme.is_dark());
        assert!(theme.root().is_dark());
    }
}
