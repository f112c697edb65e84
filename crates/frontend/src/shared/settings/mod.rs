//! Application settings: the observable store, its persistence in
//! localStorage, and the reactive bridge used by components.

pub mod store;

pub use store::{SettingsStore, SubscriptionId};

use crate::shared::theme::apply_theme;
use contracts::system::settings::AppSettings;
use leptos::prelude::*;
use web_sys::window;

const SETTINGS_STORAGE_KEY: &str = "isp-portal-settings";

/// Parse persisted settings; anything unreadable falls back to defaults.
pub fn parse_settings(raw: Option<&str>) -> AppSettings {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

fn load_settings() -> AppSettings {
    let raw = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SETTINGS_STORAGE_KEY).ok().flatten());
    parse_settings(raw.as_deref())
}

fn save_settings(settings: &AppSettings) {
    let json = match serde_json::to_string(settings) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("failed to serialize settings: {}", e);
            return;
        }
    };
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SETTINGS_STORAGE_KEY, &json);
    }
}

/// Creates the settings store, applies the saved theme and keeps
/// localStorage and the document in sync with every change.
#[component]
pub fn SettingsProvider(children: Children) -> impl IntoView {
    let initial = load_settings();
    apply_theme(&initial);

    let store = SettingsStore::new(initial);
    let id = store.subscribe(|settings| {
        save_settings(settings);
        apply_theme(settings);
        log::debug!(
            "settings changed: dark_mode={} palette={}",
            settings.dark_mode,
            settings.palette.as_str()
        );
    });
    let cleanup_store = store.clone();
    on_cleanup(move || {
        cleanup_store.unsubscribe(id);
    });

    provide_context(store);
    children()
}

pub fn use_settings_store() -> SettingsStore {
    use_context::<SettingsStore>().unwrap_or_else(|| {
        log::warn!("SettingsStore not provided, using a detached store");
        SettingsStore::default()
    })
}

/// Current settings as a signal. The subscription ends with the
/// calling component.
pub fn use_settings() -> ReadSignal<AppSettings> {
    let store = use_settings_store();
    let (settings, set_settings) = signal(store.get());
    let id = store.subscribe(move |s| set_settings.set(*s));
    on_cleanup(move || {
        store.unsubscribe(id);
    });
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::settings::ColorPalette;

    #[test]
    fn test_parse_settings() {
        let parsed = parse_settings(Some(r#"{"dark_mode":false,"palette":"forest"}"#));
        assert!(!parsed.dark_mode);
        assert_eq!(parsed.palette, ColorPalette::Forest);

        assert_eq!(parse_settings(None), AppSettings::default());
        assert_eq!(parse_settings(Some("not json")), AppSettings::default());
        assert_eq!(parse_settings(Some("{}")), AppSettings::default());
    }
}
