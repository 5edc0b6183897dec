//! Environment color-scheme detection
//!
//! Used only when no dark-mode preference has been stored.

use std::env;

/// Explicit override: `dark` or `light`
pub const COLOR_SCHEME_ENV: &str = "ONBOARD_COLOR_SCHEME";

/// Reports the runtime environment's light/dark preference
pub trait ColorSchemeProbe: Send {
    fn prefers_dark(&self) -> bool;
}

/// Reads the terminal's reported background from environment variables
///
/// Checks in order:
/// 1. `ONBOARD_COLOR_SCHEME` ("dark" | "light")
/// 2. `COLORFGBG` (format: "fg;bg", bg > 6 = light)
/// 3. `TERM_BACKGROUND` ("dark" | "light")
/// 4. Default to dark
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorScheme;

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        detect_dark(|key| env::var(key).ok())
    }
}

/// A probe with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme(pub bool);

impl ColorSchemeProbe for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

fn detect_dark(var: impl Fn(&str) -> Option<String>) -> bool {
    if let Some(val) = var(COLOR_SCHEME_ENV) {
        match val.trim().to_lowercase().as_str() {
            "dark" => return true,
            "light" => return false,
            _ => {}
        }
    }

    if let Some(val) = var("COLORFGBG") {
        // Some terminals report "fg;default;bg", so take the last field
        if let Some(bg) = val.rsplit(';').next() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return bg_num <= 6; // 0-6 are dark colors in standard palette
            }
        }
    }

    if let Some(val) = var("TERM_BACKGROUND") {
        return val.to_lowercase() != "light";
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn detect(vars: &[(&str, &str)]) -> bool {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_dark(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_dark() {
        assert!(detect(&[]));
    }

    #[test]
    fn test_colorfgbg() {
        assert!(detect(&[("COLORFGBG", "15;0")]));
        assert!(!detect(&[("COLORFGBG", "0;15")]));
        assert!(!detect(&[("COLORFGBG", "0;default;15")]));
    }

    #[test]
    fn test_term_background() {
        assert!(!detect(&[("TERM_BACKGROUND", "light")]));
        assert!(detect(&[("TERM_BACKGROUND", "dark")]));
    }

    #[test]
    fn test_override_wins() {
        assert!(!detect(&[(COLOR_SCHEME_ENV, "light"), ("COLORFGBG", "15;0")]));
        assert!(detect(&[(COLOR_SCHEME_ENV, "DARK"), ("TERM_BACKGROUND", "light")]));
        // Unrecognized override falls through
        assert!(!detect(&[(COLOR_SCHEME_ENV, "auto"), ("TERM_BACKGROUND", "light")]));
    }

    #[test]
    fn test_fixed_scheme() {
        assert!(FixedScheme(true).prefers_dark());
        assert!(!FixedScheme(false).prefers_dark());
    }
}
