//! Open/close lifecycle around the wizard
//!
//! A closed modal holds no wizard at all, so in-progress data cannot
//! outlive a dismissal.

use tracing::info;

use super::state::Wizard;
use crate::host::WizardHost;

/// The onboarding wizard plus its open/closed state
#[derive(Debug, Default)]
pub struct OnboardingModal {
    wizard: Option<Wizard>,
}

impl OnboardingModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.wizard.is_some()
    }

    /// Open on a blank step 1. Reopening an open modal keeps its progress.
    pub fn open(&mut self) {
        if self.wizard.is_none() {
            self.wizard = Some(Wizard::new());
        }
    }

    pub fn wizard(&self) -> Option<&Wizard> {
        self.wizard.as_ref()
    }

    pub fn wizard_mut(&mut self) -> Option<&mut Wizard> {
        self.wizard.as_mut()
    }

    /// Close without completing, discarding all entered data
    pub fn dismiss(&mut self, host: &mut impl WizardHost) {
        if let Some(wizard) = self.wizard.take() {
            info!(session_id = %wizard.session_id(), step = wizard.current_step().number(), "Onboarding dismissed");
            host.on_close();
        }
    }

    /// Submit the wizard, hand the result to the host, and close.
    ///
    /// Returns false, leaving the modal open and the host untouched, when
    /// the modal is closed or the wizard is not on its last step.
    pub fn complete(&mut self, host: &mut impl WizardHost) -> bool {
        let Some(wizard) = self.wizard.as_mut() else {
            return false;
        };
        let session_id = wizard.session_id();
        let Some(data) = wizard.submit() else {
            return false;
        };
        self.wizard = None;
        info!(%session_id, "Onboarding completed");
        host.on_complete(data);
        host.on_close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormData, Step, StepPatch};

    #[derive(Default)]
    struct RecordingHost {
        completed: Vec<FormData>,
        closes: usize,
    }

    impl WizardHost for RecordingHost {
        fn on_complete(&mut self, data: FormData) {
            self.completed.push(data);
        }

        fn on_close(&mut self) {
            self.closes += 1;
        }
    }

    fn walk_to_last_step(modal: &mut OnboardingModal) {
        let wizard = modal.wizard_mut().unwrap();
        wizard.update_step_data(StepPatch::full_name("Jane Doe"));
        wizard.update_step_data(StepPatch::email("jane@x.com"));
        wizard.advance();
        wizard.update_step_data(StepPatch::username("janed"));
        wizard.update_step_data(StepPatch::password("password123"));
        wizard.advance();
        assert_eq!(wizard.current_step(), Step::Preferences);
    }

    #[test]
    fn test_starts_closed() {
        let modal = OnboardingModal::new();
        assert!(!modal.is_open());
        assert!(modal.wizard().is_none());
    }

    #[test]
    fn test_complete_calls_host_once_then_closes() {
        let mut modal = OnboardingModal::new();
        let mut host = RecordingHost::default();
        modal.open();
        walk_to_last_step(&mut modal);

        assert!(modal.complete(&mut host));
        assert!(!modal.is_open());
        assert_eq!(host.completed.len(), 1);
        assert_eq!(host.closes, 1);
        assert_eq!(host.completed[0].account_setup.username, "janed");

        // Nothing more to complete
        assert!(!modal.complete(&mut host));
        assert_eq!(host.completed.len(), 1);
    }

    #[test]
    fn test_complete_refused_before_last_step() {
        let mut modal = OnboardingModal::new();
        let mut host = RecordingHost::default();
        modal.open();

        assert!(!modal.complete(&mut host));
        assert!(modal.is_open());
        assert!(host.completed.is_empty());
        assert_eq!(host.closes, 0);

        let wizard = modal.wizard_mut().unwrap();
        wizard.update_step_data(StepPatch::full_name("Jane Doe"));
        wizard.update_step_data(StepPatch::email("jane@x.com"));
        assert!(wizard.advance());

        assert!(!modal.complete(&mut host));
        assert_eq!(modal.wizard().unwrap().current_step(), Step::AccountSetup);
        assert!(host.completed.is_empty());
    }

    #[test]
    fn test_dismiss_discards_progress() {
        let mut modal = OnboardingModal::new();
        let mut host = RecordingHost::default();
        modal.open();
        walk_to_last_step(&mut modal);

        modal.dismiss(&mut host);
        assert!(host.completed.is_empty());
        assert_eq!(host.closes, 1);

        modal.open();
        let wizard = modal.wizard().unwrap();
        assert_eq!(wizard.current_step(), Step::PersonalInfo);
        assert_eq!(wizard.form(), &FormData::default());
    }

    #[test]
    fn test_reopen_after_complete_is_blank() {
        let mut modal = OnboardingModal::new();
        let mut host = RecordingHost::default();
        modal.open();
        walk_to_last_step(&mut modal);
        modal.complete(&mut host);

        modal.open();
        assert_eq!(modal.wizard().unwrap().form(), &FormData::default());
    }

    #[test]
    fn test_dismiss_when_closed_is_silent() {
        let mut modal = OnboardingModal::new();
        let mut host = RecordingHost::default();
        modal.dismiss(&mut host);
        assert_eq!(host.closes, 0);
    }
}
