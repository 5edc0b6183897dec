//! Theme preference store
//!
//! Resolves the dark-mode flag from two sources, in order: the persisted
//! value, then the environment's color-scheme preference. Every change is
//! written back immediately and pushed to the rendering root.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{info, warn};

use super::probe::ColorSchemeProbe;
use super::root::RootFlag;
use crate::storage::KeyValueStore;

/// Key the dark-mode flag is stored under
pub const DARK_MODE_KEY: &str = "darkMode";

/// Where the current dark-mode value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceSource {
    /// Read from, or written to, persistent storage
    Stored,
    /// Taken from the environment because nothing was stored
    Environment,
}

impl fmt::Display for PreferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stored => write!(f, "stored preference"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// Persisted dark-mode preference
pub struct ThemeStore {
    kv: Box<dyn KeyValueStore>,
    probe: Box<dyn ColorSchemeProbe>,
    root: RootFlag,
    dark: bool,
    source: PreferenceSource,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("dark", &self.dark)
            .field("source", &self.source)
            .finish()
    }
}

impl ThemeStore {
    /// Open the store, resolving the initial value and applying it to `root`
    pub fn new(
        kv: Box<dyn KeyValueStore>,
        probe: Box<dyn ColorSchemeProbe>,
        root: RootFlag,
    ) -> Self {
        let mut store = Self {
            kv,
            probe,
            root,
            dark: false,
            source: PreferenceSource::Environment,
        };
        store.resolve();
        store
    }

    /// The persisted value, if one exists and is a JSON boolean
    pub fn read_persisted(&self) -> Option<bool> {
        match self.kv.get(DARK_MODE_KEY)? {
            Value::Bool(dark) => Some(dark),
            other => {
                warn!(value = %other, "Ignoring malformed dark mode preference");
                None
            }
        }
    }

    /// Current dark-mode state
    pub fn get_preference(&self) -> bool {
        self.dark
    }

    pub fn source(&self) -> PreferenceSource {
        self.source
    }

    /// Handle to the rendering root flag this store drives
    pub fn root(&self) -> &RootFlag {
        &self.root
    }

    /// Persist a value and apply it to the rendering root.
    ///
    /// A failed write is logged and otherwise ignored; the in-memory state
    /// and the root flag still change.
    pub fn set_preference(&mut self, dark: bool) {
        if let Err(e) = self.kv.set(DARK_MODE_KEY, Value::Bool(dark)) {
            warn!(error = %e, "Failed to persist dark mode preference");
        }
        self.apply(dark, PreferenceSource::Stored);
        info!(dark, "Dark mode preference set");
    }

    /// Flip the current value, persist it, and return the new value
    pub fn toggle(&mut self) -> bool {
        let dark = !self.dark;
        self.set_preference(dark);
        dark
    }

    /// Forget the stored value and fall back to the environment
    pub fn clear(&mut self) {
        if let Err(e) = self.kv.remove(DARK_MODE_KEY) {
            warn!(error = %e, "Failed to clear dark mode preference");
        }
        self.resolve();
        info!(dark = self.dark, "Dark mode preference cleared");
    }

    fn resolve(&mut self) {
        match self.read_persisted() {
            Some(dark) => self.apply(dark, PreferenceSource::Stored),
            None => {
                let dark = self.probe.prefers_dark();
                self.apply(dark, PreferenceSource::Environment);
            }
        }
    }

    fn apply(&mut self, dark: bool, source: PreferenceSource) {
        self.dark = dark;
        self.source = source;
        self.root.set_dark(dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};
    use crate::theme::probe::FixedScheme;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    struct CountingProbe {
        dark: bool,
        calls: Arc<AtomicUsize>,
    }

    impl ColorSchemeProbe for CountingProbe {
        fn prefers_dark(&self) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.dark
        }
    }

    fn memory_with(value: Value) -> Box<MemoryStore> {
        let mut kv = MemoryStore::new();
        kv.set(DARK_MODE_KEY, value).unwrap();
        Box::new(kv)
    }

    #[test]
    fn test_falls_back_to_environment() {
        let root = RootFlag::default();
        let store = ThemeStore::new(
            Box::new(MemoryStore::new()),
            Box::new(FixedScheme(true)),
            root.clone(),
        );
        assert!(store.get_preference());
        assert_eq!(store.source(), PreferenceSource::Environment);
        assert!(root.is_dark());
    }

    #[test]
    fn test_stored_value_wins() {
        let store = ThemeStore::new(
            memory_with(Value::Bool(false)),
            Box::new(FixedScheme(true)),
            RootFlag::default(),
        );
        assert!(!store.get_preference());
        assert_eq!(store.source(), PreferenceSource::Stored);
    }

    #[test]
    fn test_malformed_value_treated_as_absent() {
        for raw in [json!(""), json!("true"), json!({ "dark": true }), json!(1), Value::Null] {
            let store = ThemeStore::new(
                memory_with(raw.clone()),
                Box::new(FixedScheme(false)),
                RootFlag::default(),
            );
            assert_eq!(store.read_persisted(), None, "raw value {:?}", raw);
            assert_eq!(store.source(), PreferenceSource::Environment);
            assert!(!store.get_preference());
        }
    }

    #[test]
    fn test_toggle_persists_and_applies() {
        let root = RootFlag::default();
        let mut store = ThemeStore::new(
            Box::new(MemoryStore::new()),
            Box::new(FixedScheme(false)),
            root.clone(),
        );

        assert!(store.toggle());
        assert!(root.is_dark());
        assert_eq!(store.read_persisted(), Some(true));

        assert!(!store.toggle());
        assert!(!root.is_dark());
        assert_eq!(store.read_persisted(), Some(false));
    }

    #[test]
    fn test_reload_does_not_consult_environment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        let mut store = ThemeStore::new(
            Box::new(JsonFileStore::new(path.clone())),
            Box::new(FixedScheme(false)),
            RootFlag::default(),
        );
        store.set_preference(true);

        let calls = Arc::new(AtomicUsize::new(0));
        let reloaded = ThemeStore::new(
            Box::new(JsonFileStore::new(path)),
            Box::new(CountingProbe {
                dark: false,
                calls: calls.clone(),
            }),
            RootFlag::default(),
        );
        assert!(reloaded.get_preference());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reads_hand_written_boolean() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"darkMode": true, "other": 5}"#).unwrap();

        let mut store = ThemeStore::new(
            Box::new(JsonFileStore::new(path.clone())),
            Box::new(FixedScheme(false)),
            RootFlag::default(),
        );
        assert!(store.get_preference());
        assert_eq!(store.source(), PreferenceSource::Stored);

        store.set_preference(false);
        let raw = std::fs::read_to_string(&path).unwrap();
        let on_disk: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, json!({ "darkMode": false, "other": 5 }));
    }

    #[test]
    fn test_non_boolean_value_ignored_per_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"darkMode": "true", "other": 5}"#).unwrap();

        let store = ThemeStore::new(
            Box::new(JsonFileStore::new(path.clone())),
            Box::new(FixedScheme(false)),
            RootFlag::default(),
        );
        assert_eq!(store.read_persisted(), None);
        assert_eq!(store.source(), PreferenceSource::Environment);
        assert_eq!(JsonFileStore::new(path).get("other"), Some(json!(5)));
    }

    #[test]
    fn test_clear_returns_to_environment() {
        let mut store = ThemeStore::new(
            memory_with(Value::Bool(false)),
            Box::new(FixedScheme(true)),
            RootFlag::default(),
        );
        store.clear();
        assert_eq!(store.read_persisted(), None);
        assert_eq!(store.source(), PreferenceSource::Environment);
        assert!(store.get_preference());
    }
}
