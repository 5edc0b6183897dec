//! Wizard state machine
//!
//! Holds the in-progress form, the current step, and the most recent
//! validation result per step. Steps can only be left forward through
//! `advance`, which gates on the current step validating cleanly.

use tracing::debug;
use uuid::Uuid;

use super::validate::{validate_account_setup, validate_personal_info};
use crate::models::{FieldErrors, FormData, StepPatch, Step, ValidationErrors};

/// How a step relates to the current position, for the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Already passed; can be jumped back to
    Completed,
    /// The step being shown
    Current,
    /// Not reached yet; cannot be jumped to
    Upcoming,
}

/// Multi-step onboarding wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    session_id: Uuid,
    form: FormData,
    current: Step,
    errors: ValidationErrors,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// A fresh wizard on step 1 with a blank form
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        debug!(%session_id, "Wizard opened");
        Self {
            session_id,
            form: FormData::default(),
            current: Step::PersonalInfo,
            errors: ValidationErrors::default(),
        }
    }

    /// Identifier of this open/close cycle, for log correlation
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Last validation result for a step (preferences never has one)
    pub fn errors_for(&self, step: Step) -> Option<&FieldErrors> {
        self.errors.for_step(step)
    }

    /// Merge field changes into one step's data. No validation happens here.
    pub fn update_step_data(&mut self, patch: StepPatch) {
        self.form.apply(patch);
    }

    /// Validate the current step and move forward if it passed.
    ///
    /// Returns true if the step changed. The error record for the current
    /// step is replaced, not merged. On the last step this does nothing;
    /// use [`Wizard::submit`] instead.
    pub fn advance(&mut self) -> bool {
        let step = self.current;
        let errors = match step {
            Step::PersonalInfo => validate_personal_info(&self.form.personal_info),
            Step::AccountSetup => validate_account_setup(&self.form.account_setup),
            Step::Preferences => return false,
        };

        let valid = errors.is_empty();
        if !valid {
            debug!(
                session_id = %self.session_id,
                step = step.number(),
                invalid_fields = errors.len(),
                "Step failed validation"
            );
        }
        self.errors.replace(step, errors);

        match step.next() {
            Some(next) if valid => {
                debug!(session_id = %self.session_id, from = step.number(), to = next.number(), "Advanced");
                self.current = next;
                true
            }
            _ => false,
        }
    }

    /// Move back one step. Errors and data are kept.
    pub fn retreat(&mut self) -> bool {
        match self.current.prev() {
            Some(prev) => {
                debug!(session_id = %self.session_id, from = self.current.number(), to = prev.number(), "Retreated");
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Whether the progress indicator may jump to `step`
    pub fn can_jump_to(&self, step: Step) -> bool {
        step <= self.current
    }

    /// Jump to the current or an earlier step. Forward jumps are ignored.
    pub fn jump_to(&mut self, step: Step) -> bool {
        if !self.can_jump_to(step) {
            return false;
        }
        if step != self.current {
            debug!(session_id = %self.session_id, from = self.current.number(), to = step.number(), "Jumped");
        }
        self.current = step;
        true
    }

    /// Status of a step relative to the current one
    pub fn status(&self, step: Step) -> StepStatus {
        if step < self.current {
            StepStatus::Completed
        } else if step == self.current {
            StepStatus::Current
        } else {
            StepStatus::Upcoming
        }
    }

    /// Hand back a copy of the collected data and reset to a blank wizard.
    ///
    /// Only allowed on the last step, which the earlier steps must have
    /// passed validation to reach. Returns `None` and changes nothing on any
    /// other step.
    pub fn submit(&mut self) -> Option<FormData> {
        if !self.current.is_last() {
            debug!(session_id = %self.session_id, step = self.current.number(), "Submit before last step ignored");
            return None;
        }
        let data = self.form.clone();
        debug!(session_id = %self.session_id, "Wizard submitted");
        self.reset();
        Some(data)
    }

    /// Discard everything and start over on step 1
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
