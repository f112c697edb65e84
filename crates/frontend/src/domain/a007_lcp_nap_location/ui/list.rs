use super::super::api;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{SearchInput, Searchable};
use contracts::domain::a007_lcp_nap_location::LcpNapLocation;
use contracts::shared::text::any_contains;
use leptos::prelude::*;

impl Searchable for LcpNapLocation {
    fn matches_filter(&self, filter: &str) -> bool {
        let code = self.code();
        let area = self.area();
        any_contains(
            &[
                code.as_str(),
                self.location_name.as_deref().unwrap_or_default(),
                area.as_str(),
            ],
            filter,
        )
    }
}

fn ports_cell(location: &LcpNapLocation) -> String {
    match (location.ports_available(), location.port_total) {
        (Some(free), Some(total)) => format!("{} / {}", free, total),
        _ => "-".to_string(),
    }
}

#[component]
pub fn LcpNapLocationList() -> impl IntoView {
    let list = ListState::<LcpNapLocation>::new();
    let fetch = move || list.load(false, api::fetch_locations);
    fetch();

    view! {
        <div class="page">
            <PageHeader title="LCP / NAP Locations" subtitle="Fiber distribution points for technician routing">
                <SearchInput
                    value=list.filter
                    on_change=Callback::new(move |v| list.set_filter(v))
                    placeholder="Search code, name, area..."
                />
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner
                message=list.error
                on_retry=Callback::new(move |_| fetch())
                on_dismiss=Callback::new(move |_| list.clear_error())
            />

            <Show
                when=move || !list.loading.get()
                fallback=|| view! { <div class="loading">"Loading locations..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Code"</th>
                                <th class="table__header-cell">"Location"</th>
                                <th class="table__header-cell">"Area"</th>
                                <th class="table__header-cell table__header-cell--right">"Free ports"</th>
                                <th class="table__header-cell">"Map"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.visible().into_iter().map(|row| {
                                let full = row.ports_available() == Some(0);
                                view! {
                                    <tr class="table__row" class:table__row--warning=full>
                                        <td class="table__cell"><code>{row.code()}</code></td>
                                        <td class="table__cell">{row.location_name.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{row.area()}</td>
                                        <td class="table__cell table__cell--right">{ports_cell(&row)}</td>
                                        <td class="table__cell">
                                            {row.map_url().map(|url| view! {
                                                <a href=url target="_blank" rel="noopener" title="Open map">
                                                    {icon("map-pin")}
                                                </a>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>

            <PaginationControls
                current_page=list.page
                total_pages=Signal::derive(move || list.total_pages())
                total_count=Signal::derive(move || list.filtered_count())
                page_size=list.page_size
                on_page_change=Callback::new(move |p| list.page.set(p))
                on_page_size_change=Callback::new(move |s| list.set_page_size(s))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ports_cell() {
        let mut loc: LcpNapLocation =
            serde_json::from_str(r#"{"id":1,"lcp":"LCP01","nap":"NAP03","port_total":8,"port_used":5}"#)
                .unwrap();
        assert_eq!(ports_cell(&loc), "3 / 8");
        assert!(loc.matches_filter("lcp01-nap"));
        loc.port_total = None;
        assert_eq!(ports_cell(&loc), "-");
    }
}
