//! One opened tab: its screen plus visibility.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::logging::log;
use leptos::prelude::*;

/// The screen stays mounted while its tab is open, so switching tabs keeps
/// its state. Closing the tab disposes it and runs the screen's cleanup.
#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key);
    let visible = Memo::new(move |_| {
        key.with_value(|k| tabs_store.active.with(|a| a.as_deref() == Some(k.as_str())))
    });

    log!("tab mounted: {}", key.get_value());
    on_cleanup(move || log!("tab disposed: {}", key.get_value()));

    view! {
        <section
            class="tabs__item"
            class:tabs__item--hidden=move || !visible.get()
            data-tab-key=key.get_value()
        >
            {key.with_value(|k| render_tab_content(k, tabs_store))}
        </section>
    }
}
