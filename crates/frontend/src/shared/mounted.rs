use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tracks whether the owning component is still mounted.
///
/// Async work checks the guard after every `await` and drops its result
/// once the component is gone.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl MountGuard {
    /// Guard tied to the current reactive owner.
    pub fn new() -> Self {
        let guard = Self::detached();
        let flag = guard.clone();
        on_cleanup(move || flag.unmount());
        guard
    }

    /// Guard with no owner; only [`MountGuard::unmount`] clears it.
    pub fn detached() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let guard = MountGuard::detached();
        let clone = guard.clone();
        assert!(clone.is_mounted());
        guard.unmount();
        assert!(!clone.is_mounted());
    }
}
