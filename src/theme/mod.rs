//! Dark-mode preference
//!
//! One logical [`ThemeStore`] exists per process. It is created lazily on
//! first access from the default paths, unless [`install`] put one in
//! place beforehand.

pub mod probe;
pub mod root;
pub mod store;

pub use probe::{ColorSchemeProbe, EnvColorScheme, FixedScheme};
pub use root::RootFlag;
pub use store::{PreferenceSource, ThemeStore, DARK_MODE_KEY};

use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

use crate::config::paths::OnboardPaths;
use crate::storage::{JsonFileStore, MemoryStore};

static GLOBAL: OnceCell<ThemeHandle> = OnceCell::new();

/// Shared handle to a theme store
#[derive(Debug, Clone)]
pub struct ThemeHandle(Arc<Mutex<ThemeStore>>);

impl ThemeHandle {
    pub fn new(store: ThemeStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut ThemeStore) -> R) -> R {
        // The store has no invariants a panic mid-update could break
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn is_dark(&self) -> bool {
        self.with(|store| store.get_preference())
    }

    pub fn set_dark(&self, dark: bool) {
        self.with(|store| store.set_preference(dark));
    }

    pub fn toggle(&self) -> bool {
        self.with(ThemeStore::toggle)
    }

    /// Rendering root flag driven by this store
    pub fn root(&self) -> RootFlag {
        self.with(|store| store.root().clone())
    }
}

/// Open a store over the preference file under `paths`
pub fn open(paths: &OnboardPaths) -> ThemeStore {
    ThemeStore::new(
        Box::new(JsonFileStore::new(paths.preferences_file())),
        Box::new(EnvColorScheme),
        RootFlag::default(),
    )
}

/// Make `store` the process-wide instance.
///
/// Returns false, leaving the existing instance in place, if one was
/// already created.
pub fn install(store: ThemeStore) -> bool {
    GLOBAL.set(ThemeHandle::new(store)).is_ok()
}

/// The process-wide store, created on first use
pub fn global() -> ThemeHandle {
    GLOBAL
        .get_or_init(|| {
            let store = match OnboardPaths::new() {
                Ok(paths) => open(&paths),
                Err(e) => {
                    warn!(error = %e, "No preference directory; dark mode will not persist");
                    ThemeStore::new(
                        Box::new(MemoryStore::new()),
                        Box::new(EnvColorScheme),
                        RootFlag::default(),
                    )
                }
            };
            ThemeHandle::new(store)
        })
        .clone()
}
