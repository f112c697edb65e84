use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{customer_detail_key, title_for_key};
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::{format_money, format_optional};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{SearchInput, Searchable};
use contracts::domain::a009_reconnection_log::ReconnectionLog;
use contracts::shared::text::any_contains;
use leptos::prelude::*;

impl Searchable for ReconnectionLog {
    fn matches_filter(&self, filter: &str) -> bool {
        any_contains(
            &[
                self.account_no.as_str(),
                self.customer_name.as_deref().unwrap_or_default(),
                self.plan.as_deref().unwrap_or_default(),
                self.remarks.as_deref().unwrap_or_default(),
            ],
            filter,
        )
    }
}

#[component]
pub fn ReconnectionLogList() -> impl IntoView {
    let list = ListState::<ReconnectionLog>::new();
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let fetch = move || list.load(false, api::fetch_logs);
    fetch();

    view! {
        <div class="page">
            <PageHeader title="Reconnection Logs">
                <SearchInput
                    value=list.filter
                    on_change=Callback::new(move |v| list.set_filter(v))
                    placeholder="Search account, customer, remarks..."
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

            <div class="summary-row">
                <span>{move || format!("{} reconnections", list.filtered_count())}</span>
                <span>
                    "Fees: "
                    <strong>{move || format_money(ReconnectionLog::total_fees(&list.filtered()))}</strong>
                </span>
            </div>

            <Show
                when=move || !list.loading.get()
                fallback=|| view! { <div class="loading">"Loading reconnection logs..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Account"</th>
                                <th class="table__header-cell">"Customer"</th>
                                <th class="table__header-cell">"Plan"</th>
                                <th class="table__header-cell table__header-cell--right">"Fee"</th>
                                <th class="table__header-cell">"Remarks"</th>
                                <th class="table__header-cell">"By"</th>
                                <th class="table__header-cell">"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.visible().into_iter().map(|row| {
                                let key = customer_detail_key(&row.account_no);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    ctx.open_tab(&key, &title_for_key(&key));
                                                }
                                            >
                                                {row.account_no.clone()}
                                            </a>
                                        </td>
                                        <td class="table__cell">{row.customer_name.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{row.plan.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell table__cell--right">{format_money(row.reconnection_fee)}</td>
                                        <td class="table__cell">{row.remarks.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{row.created_by.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{format_optional(&row.created_at)}</td>
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
