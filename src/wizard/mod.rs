//! Onboarding wizard core
//!
//! Validators, the step state machine, and the modal lifecycle. Nothing in
//! here touches the terminal or the filesystem.

pub mod modal;
pub mod state;
pub mod validate;

pub use modal::OnboardingModal;
pub use state::{StepStatus, Wizard};
pub use validate::{validate_account_setup, validate_personal_info};
