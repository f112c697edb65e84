use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHeader(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str()))
    });

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div
            class="tabs__header"
            class:tabs__header--active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span>{tab.title}</span>
            <button class="tabs__close" title="Close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Tab bar plus the content of every opened tab.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| (tab.key.clone(), tab.title.clone())
                    children=move |tab| view! { <TabHeader tab=tab tabs_store=tabs_store /> }
                />
            </div>
            <Show
                when=move || !tabs_store.opened.with(|tabs| tabs.is_empty())
                fallback=|| view! {
                    <div class="tabs__empty">"Select a screen from the menu"</div>
                }
            >
                <div class="tabs__content">
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                </div>
            </Show>
        </div>
    }
}
