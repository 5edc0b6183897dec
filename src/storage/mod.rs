//! Storage layer for the onboarding wizard
//!
//! JSON files with atomic writes, and the key-value store the theme
//! preference is persisted in.

pub mod file_io;
pub mod kv;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
