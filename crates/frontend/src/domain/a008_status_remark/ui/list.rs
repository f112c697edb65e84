use super::super::api;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{SearchInput, Searchable};
use contracts::domain::a008_status_remark::StatusRemark;
use contracts::shared::text::any_contains;
use leptos::prelude::*;

impl Searchable for StatusRemark {
    fn matches_filter(&self, filter: &str) -> bool {
        any_contains(
            &[
                self.status_remarks.as_str(),
                self.created_by.as_deref().unwrap_or_default(),
            ],
            filter,
        )
    }
}

#[component]
pub fn StatusRemarkList() -> impl IntoView {
    let list = ListState::<StatusRemark>::new();
    let fetch = move || list.load(false, api::fetch_remarks);
    fetch();

    view! {
        <div class="page">
            <PageHeader title="Status Remarks">
                <SearchInput value=list.filter on_change=Callback::new(move |v| list.set_filter(v)) />
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
                fallback=|| view! { <div class="loading">"Loading remarks..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Remark"</th>
                                <th class="table__header-cell">"Created by"</th>
                                <th class="table__header-cell">"Created"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.visible().into_iter().map(|row| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.status_remarks}</td>
                                    <td class="table__cell">{row.created_by.unwrap_or_else(|| "-".into())}</td>
                                    <td class="table__cell">{format_optional(&row.created_at)}</td>
                                </tr>
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
