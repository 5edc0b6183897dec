//! Validation error records
//!
//! Per-field messages for the steps that have validation. An empty record
//! means the step is valid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::step::Step;

/// A validated form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Username,
    Password,
}

impl Field {
    /// Field name as it appears in serialized form data
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
        }
    }

    /// The step that owns this field
    pub fn step(self) -> Step {
        match self {
            Self::FullName | Self::Email => Step::PersonalInfo,
            Self::Username | Self::Password => Step::AccountSetup,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Field → message for one step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message for a field, if it failed validation
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// True when no field has an error
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Last validation result for each validated step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub personal_info: FieldErrors,
    pub account_setup: FieldErrors,
}

impl ValidationErrors {
    /// Errors recorded for a step; the preferences step never has any
    pub fn for_step(&self, step: Step) -> Option<&FieldErrors> {
        match step {
            Step::PersonalInfo => Some(&self.personal_info),
            Step::AccountSetup => Some(&self.account_setup),
            Step::Preferences => None,
        }
    }

    /// Replace the record for a step wholesale
    pub fn replace(&mut self, step: Step, errors: FieldErrors) {
        match step {
            Step::PersonalInfo => self.personal_info = errors,
            Step::AccountSetup => self.account_setup = errors,
            Step::Preferences => {}
        }
    }

    /// Message for a field from whichever step owns it
    pub fn message(&self, field: Field) -> Option<&str> {
        self.for_step(field.step()).and_then(|errors| errors.get(field))
    }

    /// True when no step has an error recorded
    pub fn is_empty(&self) -> bool {
        self.personal_info.is_empty() && self.account_setup.is_empty()
    }
}
