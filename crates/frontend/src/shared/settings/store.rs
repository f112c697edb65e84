//! Observable settings store.
//!
//! One store exists per application. Screens subscribe for changes
//! and unsubscribe when they unmount.

use contracts::system::settings::AppSettings;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&AppSettings) + Send + Sync>;

struct Inner {
    settings: AppSettings,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: SubscriptionId,
}

#[derive(Clone)]
pub struct SettingsStore {
    inner: Arc<RwLock<Inner>>,
}

impl SettingsStore {
    pub fn new(initial: AppSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                settings: initial,
                listeners: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self) -> AppSettings {
        self.read().settings
    }

    pub fn set(&self, settings: AppSettings) {
        self.update(|current| *current = settings);
    }

    /// Apply `f` and notify every subscriber if the settings changed.
    ///
    /// Listeners run after the lock is released, so they may read the
    /// store or subscribe again.
    pub fn update(&self, f: impl FnOnce(&mut AppSettings)) {
        let (snapshot, listeners) = {
            let mut inner = self.write();
            let before = inner.settings;
            f(&mut inner.settings);
            if inner.settings == before {
                return;
            }
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (inner.settings, listeners)
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&AppSettings) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.write();
        let before = inner.listeners.len();
        inner.listeners.retain(|(sid, _)| *sid != id);
        inner.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.read().listeners.len()
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::settings::ColorPalette;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_subscribers_see_changes() {
        let store = SettingsStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |s| sink.lock().unwrap().push(s.palette));

        store.update(|s| s.palette = ColorPalette::Sunset);
        store.update(|s| s.palette = ColorPalette::Slate);
        assert_eq!(*seen.lock().unwrap(), vec![ColorPalette::Sunset, ColorPalette::Slate]);
        assert_eq!(store.get().palette, ColorPalette::Slate);
    }

    #[test]
    fn test_no_notification_without_change() {
        let store = SettingsStore::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.set(store.get());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        store.update(|s| s.dark_mode = !s.dark_mode);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = SettingsStore::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.subscriber_count(), 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(|s| s.dark_mode = !s.dark_mode);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_may_read_store() {
        let store = SettingsStore::default();
        let reader = store.clone();
        let observed = Arc::new(Mutex::new(None));
        let sink = observed.clone();
        store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.get().dark_mode));
        store.update(|s| s.dark_mode = false);
        assert_eq!(*observed.lock().unwrap(), Some(false));
    }
}
