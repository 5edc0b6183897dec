//! `config` command

use crate::config::{OnboardPaths, Settings};
use crate::logging::LOG_FILE;
use crate::theme::ThemeHandle;

/// Print resolved paths, settings and the active theme
pub fn show_config(paths: &OnboardPaths, settings: &Settings, theme: &ThemeHandle) {
    let (dark, source) = theme.with(|store| (store.get_preference(), store.source()));

    println!("Onboard Configuration");
    println!("=====================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Preferences file: {}", paths.preferences_file().display());
    println!("Log file:         {}", paths.log_dir().join(LOG_FILE).display());
    println!();
    println!("Settings:");
    println!("  Log level:          {}", settings.log_level);
    println!("  Tick rate (ms):     {}", settings.tick_rate_ms);
    println!("  Password hint:      {}", settings.show_password_hint);
    println!();
    println!(
        "Dark mode: {} ({})",
        if dark { "on" } else { "off" },
        source
    );
}
