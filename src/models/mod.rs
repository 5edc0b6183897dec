//! Core data models for the onboarding wizard
//!
//! Plain value types: the form slices, the step sequence, and the
//! validation error records.

pub mod errors;
pub mod form;
pub mod step;

pub use errors::{Field, FieldErrors, ValidationErrors};
pub use form::{
    AccountCredentials, AccountPatch, FormData, PersonalInfo, PersonalInfoPatch, Preferences,
    PreferencesPatch, StepPatch, Theme,
};
pub use step::Step;
