//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the host application, the wizard modal, and the edit state of the step
//! views.

use crate::config::settings::Settings;
use crate::host::HostApp;
use crate::models::{Field, Step, StepPatch};
use crate::theme::{RootFlag, ThemeHandle};
use crate::wizard::OnboardingModal;

use super::palette::Palette;
use super::widgets::TextInput;

/// An input on one of the step views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Username,
    Password,
    Theme,
    Newsletter,
}

impl FormField {
    /// Inputs shown on a step, in focus order
    pub fn for_step(step: Step) -> &'static [FormField] {
        match step {
            Step::PersonalInfo => &[Self::FullName, Self::Email],
            Step::AccountSetup => &[Self::Username, Self::Password],
            Step::Preferences => &[Self::Theme, Self::Newsletter],
        }
    }

    /// The validated field this input edits, if it has validation
    pub fn validated(self) -> Option<Field> {
        match self {
            Self::FullName => Some(Field::FullName),
            Self::Email => Some(Field::Email),
            Self::Username => Some(Field::Username),
            Self::Password => Some(Field::Password),
            Self::Theme | Self::Newsletter => None,
        }
    }

    pub fn is_text(self) -> bool {
        self.validated().is_some()
    }
}

/// Text state of the step views
#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    pub full_name: TextInput,
    pub email: TextInput,
    pub username: TextInput,
    pub password: TextInput,
}

impl FormInputs {
    pub fn get(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::FullName => Some(&self.full_name),
            FormField::Email => Some(&self.email),
            FormField::Username => Some(&self.username),
            FormField::Password => Some(&self.password),
            FormField::Theme | FormField::Newsletter => None,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::FullName => Some(&mut self.full_name),
            FormField::Email => Some(&mut self.email),
            FormField::Username => Some(&mut self.username),
            FormField::Password => Some(&mut self.password),
            FormField::Theme | FormField::Newsletter => None,
        }
    }

    /// Wipe all text, including the password
    pub fn clear(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.username.clear();
        self.password.clear();
    }
}

/// Build the patch that carries an input's text up to the wizard
fn patch_for(field: FormField, value: &str) -> Option<StepPatch> {
    match field {
        FormField::FullName => Some(StepPatch::full_name(value)),
        FormField::Email => Some(StepPatch::email(value)),
        FormField::Username => Some(StepPatch::username(value)),
        FormField::Password => Some(StepPatch::password(value)),
        FormField::Theme | FormField::Newsletter => None,
    }
}

/// Main application state
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,

    /// Host application: modal open state and the completed result
    pub host: HostApp,

    /// The wizard, present only while open
    pub modal: OnboardingModal,

    /// Edit state for the step views
    pub inputs: FormInputs,

    /// Index into the current step's fields
    pub focus_index: usize,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Show the password length hint
    pub show_password_hint: bool,

    root: RootFlag,
}

impl App {
    pub fn new(theme: ThemeHandle, settings: &Settings) -> Self {
        let root = theme.root();
        Self {
            should_quit: false,
            host: HostApp::new(theme),
            modal: OnboardingModal::new(),
            inputs: FormInputs::default(),
            focus_index: 0,
            show_help: false,
            status_message: None,
            show_password_hint: settings.show_password_hint,
            root,
        }
    }

    /// Palette for the current visual mode
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.root.is_dark())
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Flip dark mode and persist it
    pub fn toggle_dark_mode(&mut self) {
        let dark = self.host.theme().toggle();
        self.set_status(if dark { "Dark mode on" } else { "Dark mode off" });
    }

    /// Open the wizard on a blank form
    pub fn start_onboarding(&mut self) {
        self.host.open_modal();
        self.open_wizard();
    }

    /// Clear the last result and run the wizard again
    pub fn try_again(&mut self) {
        self.host.try_again();
        self.open_wizard();
    }

    fn open_wizard(&mut self) {
        self.inputs.clear();
        self.focus_index = 0;
        self.clear_status();
        self.modal.open();
    }

    /// Close the wizard, discarding entered data
    pub fn dismiss_wizard(&mut self) {
        self.modal.dismiss(&mut self.host);
        self.inputs.clear();
        self.focus_index = 0;
        self.set_status("Onboarding cancelled");
    }

    /// Step currently shown, if the wizard is open
    pub fn current_step(&self) -> Option<Step> {
        self.modal.wizard().map(|w| w.current_step())
    }

    /// The input that has focus, if the wizard is open
    pub fn focused_field(&self) -> Option<FormField> {
        let fields = FormField::for_step(self.current_step()?);
        fields.get(self.focus_index).copied()
    }

    pub fn next_field(&mut self) {
        if let Some(step) = self.current_step() {
            let count = FormField::for_step(step).len();
            self.focus_index = (self.focus_index + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(step) = self.current_step() {
            let count = FormField::for_step(step).len();
            self.focus_index = (self.focus_index + count - 1) % count;
        }
    }

    /// Apply an edit to the focused text input and report it to the wizard
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some(input) = self.inputs.get_mut(field) else {
            return;
        };
        edit(input);
        let patch = patch_for(field, input.value());
        if let (Some(patch), Some(wizard)) = (patch, self.modal.wizard_mut()) {
            wizard.update_step_data(patch);
        }
    }

    /// Toggle the focused preference (theme or newsletter)
    pub fn toggle_focused_preference(&mut self) {
        let field = self.focused_field();
        let Some(wizard) = self.modal.wizard_mut() else {
            return;
        };
        let prefs = wizard.form().preferences;
        match field {
            Some(FormField::Theme) => {
                wizard.update_step_data(StepPatch::theme(prefs.theme.toggled()))
            }
            Some(FormField::Newsletter) => {
                wizard.update_step_data(StepPatch::newsletter(!prefs.newsletter))
            }
            _ => {}
        }
    }

    /// Validate and move on; on failure focus the first invalid input
    pub fn advance(&mut self) {
        let Some(wizard) = self.modal.wizard_mut() else {
            return;
        };
        let step = wizard.current_step();
        if wizard.advance() {
            self.focus_index = 0;
            return;
        }
        let Some(errors) = wizard.errors_for(step) else {
            return;
        };
        if let Some(index) = FormField::for_step(step)
            .iter()
            .position(|f| f.validated().is_some_and(|v| errors.contains(v)))
        {
            self.focus_index = index;
        }
    }

    pub fn retreat(&mut self) {
        if let Some(wizard) = self.modal.wizard_mut() {
            if wizard.retreat() {
                self.focus_index = 0;
            }
        }
    }

    pub fn jump_to(&mut self, step: Step) {
        if let Some(wizard) = self.modal.wizard_mut() {
            let before = wizard.current_step();
            if wizard.jump_to(step) && before != step {
                self.focus_index = 0;
            }
        }
    }

    /// Finish the wizard and hand the result to the host
    pub fn complete(&mut self) {
        if self.modal.complete(&mut self.host) {
            self.inputs.clear();
            self.focus_index = 0;
            self.set_status("Onboarding complete");
        }
    }
}
