//! Rendering root flag
//!
//! The single visual-mode bit the top-level surface is drawn with. The
//! preference store writes it; the renderer reads it every frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared dark-mode flag for the rendering root
#[derive(Debug, Clone, Default)]
pub struct RootFlag(Arc<AtomicBool>);

impl RootFlag {
    pub fn new(dark: bool) -> Self {
        Self(Arc::new(AtomicBool::new(dark)))
    }

    pub fn set_dark(&self, dark: bool) {
        self.0.store(dark, Ordering::Relaxed);
    }

    pub fn is_dark(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = RootFlag::new(false);
        let view = flag.clone();
        flag.set_dark(true);
        assert!(view.is_dark());
    }
}
