//! Reusable TUI widgets

pub mod input;

pub use input::{TextField, TextInput};
