//! Onboard - multi-step onboarding wizard for the terminal
//!
//! This library provides a three-step account onboarding wizard (personal
//! info, account setup, preferences) with per-step validation, plus a
//! persisted dark-mode preference shared by the whole process.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings persistence
//! - `error`: Custom error types
//! - `models`: Form data, steps and validation error records
//! - `storage`: Key-value preference storage backed by JSON files
//! - `wizard`: Wizard state machine, validation and the modal wrapper
//! - `theme`: Dark-mode preference store and environment probe
//! - `host`: The application that hosts the wizard and receives results
//! - `tui`: Terminal interface built on ratatui
//! - `cli`: Command handlers for the `onboard` binary
//! - `logging`: File-backed tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard::models::StepPatch;
//! use onboard::wizard::Wizard;
//!
//! let mut wizard = Wizard::new();
//! wizard.update_step_data(StepPatch::full_name("Jane Doe"));
//! wizard.update_step_data(StepPatch::email("jane@example.com"));
//! assert!(wizard.advance());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod models;
pub mod storage;
pub mod theme;
pub mod tui;
pub mod wizard;

pub use error::OnboardError;
