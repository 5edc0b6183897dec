//! TUI dialogs

pub mod help;
pub mod onboarding;
