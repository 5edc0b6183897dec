//! Host application
//!
//! Owns the modal's open state, receives the finished form, and turns it
//! into the summary shown after onboarding.

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::error::OnboardResult;
use crate::models::{FormData, Theme};
use crate::theme::ThemeHandle;

/// Callbacks the wizard modal reports to
pub trait WizardHost {
    /// Called exactly once per successful submission
    fn on_complete(&mut self, data: FormData);

    /// Called whenever the modal closes, completed or not
    fn on_close(&mut self);
}

/// A finished onboarding run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    #[serde(flatten)]
    pub data: FormData,
    pub completed_at: DateTime<Local>,
}

impl CompletionRecord {
    /// Label/value rows for the summary. The password is never included.
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        let data = &self.data;
        vec![
            ("Name", data.personal_info.full_name.clone()),
            ("Email", data.personal_info.email.clone()),
            ("Username", data.account_setup.username.clone()),
            ("Theme", data.preferences.theme.to_string()),
            (
                "Newsletter",
                if data.preferences.newsletter { "Yes" } else { "No" }.to_string(),
            ),
        ]
    }
}

/// Output format for a printed summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Render a completion record for printing
pub fn format_summary(record: &CompletionRecord, format: SummaryFormat) -> OnboardResult<String> {
    match format {
        SummaryFormat::Text => {
            let mut out = String::from("Welcome aboard!\n");
            for (label, value) in record.summary_rows() {
                out.push_str(&format!("  {:<11} {}\n", format!("{}:", label), value));
            }
            Ok(out)
        }
        SummaryFormat::Json => Ok(serde_json::to_string_pretty(record)? + "\n"),
        SummaryFormat::Yaml => Ok(serde_yaml::to_string(record)?),
    }
}

/// The application hosting the onboarding modal
#[derive(Debug)]
pub struct HostApp {
    theme: ThemeHandle,
    modal_open: bool,
    completed: Option<CompletionRecord>,
}

impl HostApp {
    pub fn new(theme: ThemeHandle) -> Self {
        Self {
            theme,
            modal_open: false,
            completed: None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Request the onboarding modal
    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Forget the last result and open the modal again
    pub fn try_again(&mut self) {
        self.completed = None;
        self.open_modal();
    }

    /// The last completed run, if any
    pub fn completed(&self) -> Option<&CompletionRecord> {
        self.completed.as_ref()
    }

    /// Take the last completed run, leaving none
    pub fn take_completed(&mut self) -> Option<CompletionRecord> {
        self.completed.take()
    }

    pub fn theme(&self) -> &ThemeHandle {
        &self.theme
    }
}

impl WizardHost for HostApp {
    fn on_complete(&mut self, data: FormData) {
        // The chosen theme takes effect right away
        self.theme.set_dark(data.preferences.theme == Theme::Dark);
        info!(
            username = %data.account_setup.username,
            theme = %data.preferences.theme,
            newsletter = data.preferences.newsletter,
            "Onboarding result received"
        );
        self.completed = Some(CompletionRecord {
            data,
            completed_at: Local::now(),
        });
    }

    fn on_close(&mut self) {
        self.modal_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountCredentials, PersonalInfo, Preferences};
    use crate::storage::MemoryStore;
    use crate::theme::{FixedScheme, RootFlag, ThemeStore};

    fn handle(dark: bool) -> ThemeHandle {
        ThemeHandle::new(ThemeStore::new(
            Box::new(MemoryStore::new()),
            Box::new(FixedScheme(dark)),
            RootFlag::default(),
        ))
    }

    fn jane(theme: Theme) -> FormData {
        FormData {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".into(),
                email: "jane@x.com".into(),
            },
            account_setup: AccountCredentials {
                username: "janed".into(),
                password: "password123".into(),
            },
            preferences: Preferences {
                theme,
                newsletter: true,
            },
        }
    }

    #[test]
    fn test_complete_records_and_applies_theme() {
        let theme = handle(true);
        let mut host = HostApp::new(theme.clone());
        host.open_modal();

        host.on_complete(jane(Theme::Light));
        host.on_close();

        assert!(!host.is_modal_open());
        assert!(!theme.is_dark());
        assert_eq!(host.completed().unwrap().data, jane(Theme::Light));
    }

    #[test]
    fn test_try_again_clears_result() {
        let mut host = HostApp::new(handle(false));
        host.on_complete(jane(Theme::Dark));
        assert!(host.theme().is_dark());

        host.try_again();
        assert!(host.completed().is_none());
        assert!(host.is_modal_open());
    }

    #[test]
    fn test_summary_rows_hide_password() {
        let record = CompletionRecord {
            data: jane(Theme::Dark),
            completed_at: Local::now(),
        };
        let rows = record.summary_rows();
        assert_eq!(rows[0], ("Name", "Jane Doe".to_string()));
        assert_eq!(rows[4], ("Newsletter", "Yes".to_string()));
        assert!(rows.iter().all(|(_, v)| v != "password123"));
    }

    #[test]
    fn test_format_summary() {
        let record = CompletionRecord {
            data: jane(Theme::Light),
            completed_at: Local::now(),
        };

        let text = format_summary(&record, SummaryFormat::Text).unwrap();
        assert!(text.contains("Email:"));
        assert!(text.contains("jane@x.com"));
        assert!(text.contains("Light"));

        let json = format_summary(&record, SummaryFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["personalInfo"]["fullName"], "Jane Doe");
        assert_eq!(value["preferences"]["theme"], "Light");
        assert!(value["completedAt"].is_string());
        assert!(!json.contains("password123"));

        let yaml = format_summary(&record, SummaryFormat::Yaml).unwrap();
        assert!(yaml.contains("username: janed"));
        assert!(!yaml.contains("password123"));
    }
}
