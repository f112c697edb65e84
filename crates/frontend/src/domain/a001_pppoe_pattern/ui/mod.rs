//! PPPoE pattern screen: list of stored patterns and the drag-and-drop
//! sequence editor.

mod editor;
mod list;
pub mod view_model;

use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::icons::icon;
use editor::PatternEditor;
use leptos::prelude::*;
use list::PatternCards;
use view_model::PppoePatternViewModel;

#[component]
pub fn PppoePatternManager() -> impl IntoView {
    let vm = PppoePatternViewModel::new();
    vm.load();

    view! {
        <div class="page">
            <PageHeader
                title="PPPoE Patterns"
                subtitle="How subscriber usernames and passwords are generated"
            >
                <button
                    class="button button--secondary"
                    on:click=move |_| vm.load()
                    disabled=move || vm.mode.get().is_editing()
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner
                message=vm.error
                on_retry=Callback::new(move |_| vm.load())
                on_dismiss=Callback::new(move |_| vm.error.set(None))
            />

            <Show when=move || vm.loading.get()>
                <div class="loading">"Loading patterns..."</div>
            </Show>

            <Show
                when=move || vm.mode.get().is_editing()
                fallback=move || view! { <PatternCards vm=vm /> }
            >
                <PatternEditor vm=vm />
            </Show>
        </div>
    }
}
