//! Form data model
//!
//! The three slices of onboarding data and their aggregate. Every field
//! always holds a value; a blank form is empty strings, `Dark`, and `false`.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Color theme chosen on the preferences step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a theme from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Whether this theme implies dark mode
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Step 1: who the user is
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
}

/// Step 2: login credentials
///
/// The password only ever lives in memory. It is skipped on serialization
/// and wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct AccountCredentials {
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Step 3: display and mailing preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub newsletter: bool,
}

/// Everything the wizard collects
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub personal_info: PersonalInfo,
    pub account_setup: AccountCredentials,
    pub preferences: Preferences,
}

/// Partial changes to [`PersonalInfo`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Partial changes to [`AccountCredentials`]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for AccountPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPatch")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Partial changes to [`Preferences`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub theme: Option<Theme>,
    pub newsletter: Option<bool>,
}

/// A partial update addressed to exactly one step's slice of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepPatch {
    PersonalInfo(PersonalInfoPatch),
    Account(AccountPatch),
    Preferences(PreferencesPatch),
}

impl StepPatch {
    pub fn full_name(value: impl Into<String>) -> Self {
        Self::PersonalInfo(PersonalInfoPatch {
            full_name: Some(value.into()),
            ..Default::default()
        })
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self::PersonalInfo(PersonalInfoPatch {
            email: Some(value.into()),
            ..Default::default()
        })
    }

    pub fn username(value: impl Into<String>) -> Self {
        Self::Account(AccountPatch {
            username: Some(value.into()),
            ..Default::default()
        })
    }

    pub fn password(value: impl Into<String>) -> Self {
        Self::Account(AccountPatch {
            password: Some(value.into()),
            ..Default::default()
        })
    }

    pub fn theme(theme: Theme) -> Self {
        Self::Preferences(PreferencesPatch {
            theme: Some(theme),
            ..Default::default()
        })
    }

    pub fn newsletter(newsletter: bool) -> Self {
        Self::Preferences(PreferencesPatch {
            newsletter: Some(newsletter),
            ..Default::default()
        })
    }
}

impl FormData {
    /// Merge a partial update into the addressed slice, leaving the rest untouched
    pub fn apply(&mut self, patch: StepPatch) {
        match patch {
            StepPatch::PersonalInfo(p) => {
                if let Some(full_name) = p.full_name {
                    self.personal_info.full_name = full_name;
                }
                if let Some(email) = p.email {
                    self.personal_info.email = email;
                }
            }
            StepPatch::Account(mut p) => {
                if let Some(username) = p.username.take() {
                    self.account_setup.username = username;
                }
                if let Some(password) = p.password.take() {
                    self.account_setup.password.zeroize();
                    self.account_setup.password = password;
                }
            }
            StepPatch::Preferences(p) => {
                if let Some(theme) = p.theme {
                    self.preferences.theme = theme;
                }
                if let Some(newsletter) = p.newsletter {
                    self.preferences.newsletter = newsletter;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_defaults() {
        let form = FormData::default();
        assert_eq!(form.personal_info.full_name, "");
        assert_eq!(form.personal_info.email, "");
        assert_eq!(form.account_setup.username, "");
        assert_eq!(form.account_setup.password, "");
        assert_eq!(form.preferences.theme, Theme::Dark);
        assert!(!form.preferences.newsletter);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(" DARK "), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "Dark");
    }

    #[test]
    fn test_apply_touches_only_addressed_fields() {
        let mut form = FormData::default();
        form.apply(StepPatch::full_name("Jane Doe"));
        form.apply(StepPatch::email("jane@x.com"));
        form.apply(StepPatch::full_name("Jane Q. Doe"));

        assert_eq!(form.personal_info.full_name, "Jane Q. Doe");
        assert_eq!(form.personal_info.email, "jane@x.com");
        assert_eq!(form.account_setup, AccountCredentials::default());
    }

    #[test]
    fn test_apply_preferences() {
        let mut form = FormData::default();
        form.apply(StepPatch::Preferences(PreferencesPatch {
            theme: Some(Theme::Light),
            newsletter: Some(true),
        }));
        assert_eq!(
            form.preferences,
            Preferences {
                theme: Theme::Light,
                newsletter: true
            }
        );
    }

    #[test]
    fn test_password_never_serialized() {
        let mut form = FormData::default();
        form.apply(StepPatch::username("janed"));
        form.apply(StepPatch::password("password123"));

        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains("\"username\":\"janed\""));
        assert!(json.contains("\"fullName\""));
        assert!(!json.contains("password123"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = AccountCredentials {
            username: "janed".into(),
            password: "password123".into(),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("janed"));
        assert!(!debug.contains("password123"));
        assert!(!format!("{:?}", StepPatch::password("hunter22")).contains("hunter22"));
    }
}
