//! Theme management.
//!
//! Applies the dark/light mode and accent palette from [`AppSettings`]
//! to the document and renders the header selector.

use crate::shared::icons::icon;
use crate::shared::settings::{use_settings, use_settings_store};
use contracts::system::settings::{AppSettings, ColorPalette};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

pub fn mode_name(dark_mode: bool) -> &'static str {
    if dark_mode {
        "dark"
    } else {
        "light"
    }
}

/// Apply settings as `data-theme`/`data-palette` attributes on body
/// and the `--color-primary` custom property on the root element.
pub fn apply_theme(settings: &AppSettings) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", mode_name(settings.dark_mode));
        let _ = body.set_attribute("data-palette", settings.palette.as_str());
    }

    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = root
            .style()
            .set_property("--color-primary", settings.palette.primary());
    }
}

/// Dark mode toggle plus palette dropdown for the top header.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let settings = use_settings();
    let store = StoredValue::new(use_settings_store());
    let (dropdown_open, set_dropdown_open) = signal(false);

    let toggle_dark = move |_| {
        store.with_value(|s| s.update(|current| current.dark_mode = !current.dark_mode));
    };

    let select_palette = move |palette: ColorPalette| {
        store.with_value(|s| s.update(|current| current.palette = palette));
        set_dropdown_open.set(false);
    };

    view! {
        <div class="theme-selector" style="position: relative;">
            <button
                class="top-header__icon-btn"
                on:click=toggle_dark
                title=move || if settings.get().dark_mode { "Switch to light mode" } else { "Switch to dark mode" }
            >
                {move || if settings.get().dark_mode { icon("sun") } else { icon("moon") }}
            </button>
            <button
                class="top-header__icon-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_dropdown_open.update(|open| *open = !*open);
                }
                title="Color palette"
            >
                {icon("palette")}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="theme-dropdown" on:click=move |ev| ev.stop_propagation()>
                    {ColorPalette::all().into_iter().map(|palette| {
                        let is_active = move || settings.get().palette == palette;
                        view! {
                            <button
                                class=move || if is_active() { "theme-dropdown-item active" } else { "theme-dropdown-item" }
                                on:click=move |_| select_palette(palette)
                            >
                                <span class="theme-dropdown-swatch" style=format!("background: {}", palette.primary())></span>
                                {palette.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_name() {
        assert_eq!(mode_name(true), "dark");
        assert_eq!(mode_name(false), "light");
    }
}
