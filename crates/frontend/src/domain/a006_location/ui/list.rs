use super::super::api;
use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::icons::icon;
use crate::shared::mounted::MountGuard;
use contracts::domain::a006_location::{cities_in_region, City, Region};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Regions on the left, cities of the selected region on the right.
#[component]
pub fn LocationList() -> impl IntoView {
    let (regions, set_regions) = signal::<Vec<Region>>(Vec::new());
    let (cities, set_cities) = signal::<Vec<City>>(Vec::new());
    let (selected, set_selected) = signal::<Option<i64>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let guard = StoredValue::new(MountGuard::new());

    let fetch = move || {
        let guard = guard.get_value();
        set_loading.set(true);
        spawn_local(async move {
            let regions_result = api::fetch_regions().await;
            let cities_result = api::fetch_cities().await;
            if !guard.is_mounted() {
                return;
            }
            let mut errors = Vec::new();
            match regions_result {
                Ok(list) => set_regions.set(list),
                Err(e) => errors.push(format!("regions: {}", e)),
            }
            match cities_result {
                Ok(list) => set_cities.set(list),
                Err(e) => errors.push(format!("cities: {}", e)),
            }
            set_error.set((!errors.is_empty()).then(|| format!("Failed to load {}", errors.join("; "))));
            set_loading.set(false);
        });
    };
    fetch();

    let visible_cities = move || cities.with(|list| cities_in_region(list, selected.get()));

    view! {
        <div class="page">
            <PageHeader title="Regions & Cities">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner
                message=error
                on_retry=Callback::new(move |_| fetch())
                on_dismiss=Callback::new(move |_| set_error.set(None))
            />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading locations..."</div> }
            >
                <div class="split-view">
                    <div class="split-view__pane">
                        <h3>"Regions"</h3>
                        <ul class="select-list">
                            <li
                                class="select-list__item"
                                class:select-list__item--active=move || selected.get().is_none()
                                on:click=move |_| set_selected.set(None)
                            >
                                "All regions"
                            </li>
                            {move || regions.get().into_iter().map(|region| {
                                let id = region.id;
                                view! {
                                    <li
                                        class="select-list__item"
                                        class:select-list__item--active=move || selected.get() == Some(id)
                                        on:click=move |_| set_selected.set(Some(id))
                                    >
                                        {region.name}
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="split-view__pane">
                        <h3>{move || format!("Cities ({})", visible_cities().len())}</h3>
                        <ul class="select-list">
                            {move || visible_cities().into_iter().map(|city| view! {
                                <li class="select-list__item">{city.name}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>
            </Show>
        </div>
    }
}

