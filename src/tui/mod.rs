//! Terminal User Interface module
//!
//! The onboarding demo runs as a single home screen with the three-step
//! wizard drawn as a dialog over it.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod steps;
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout and colors
pub mod layout;
pub mod palette;

pub use app::App;
pub use terminal::run_tui;
