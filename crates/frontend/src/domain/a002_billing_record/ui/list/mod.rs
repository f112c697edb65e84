use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{customer_detail_key, title_for_key};
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{SearchInput, Searchable};
use contracts::domain::a002_billing_record::BillingRecord;
use contracts::shared::text::any_contains;
use leptos::prelude::*;

const TAB_KEY: &str = "a002_billing_record";

impl Searchable for BillingRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        any_contains(
            &[
                self.account_no.as_str(),
                self.full_name.as_str(),
                self.invoice_no.as_deref().unwrap_or_default(),
                self.plan.as_deref().unwrap_or_default(),
                self.status.as_str(),
            ],
            filter,
        )
    }
}

/// Sum of open balances.
pub fn outstanding_total(records: &[BillingRecord]) -> f64 {
    records
        .iter()
        .filter(|r| !r.is_settled())
        .map(|r| r.balance)
        .sum()
}

#[component]
pub fn BillingRecordList() -> impl IntoView {
    let list = ListState::<BillingRecord>::new();
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let loaded_once = StoredValue::new(false);

    let fetch = move |silent: bool| {
        loaded_once.set_value(true);
        list.load(silent, api::fetch_billing_records);
    };
    fetch(false);

    // Coming back to the tab refreshes the rows without the spinner.
    Effect::new(move |was_active: Option<bool>| {
        let is_active = ctx.active.with(|a| a.as_deref() == Some(TAB_KEY));
        if is_active && was_active == Some(false) && loaded_once.get_value() {
            fetch(true);
        }
        is_active
    });

    let open_customer = move |account_no: String| {
        let key = customer_detail_key(&account_no);
        ctx.open_tab(&key, &title_for_key(&key));
    };

    view! {
        <div class="page">
            <PageHeader title="Billing Records">
                <SearchInput
                    value=list.filter
                    on_change=Callback::new(move |v| list.set_filter(v))
                    placeholder="Search account, name, invoice..."
                />
                <button class="button button--secondary" on:click=move |_| fetch(false)>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner
                message=list.error
                on_retry=Callback::new(move |_| fetch(false))
                on_dismiss=Callback::new(move |_| list.clear_error())
            />

            <div class="summary-row">
                <span>{move || format!("{} records", list.filtered_count())}</span>
                <span>
                    "Outstanding: "
                    <strong>{move || format_money(outstanding_total(&list.filtered()))}</strong>
                </span>
            </div>

            <Show
                when=move || !list.loading.get()
                fallback=|| view! { <div class="loading">"Loading billing records..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Account"</th>
                                <th class="table__header-cell">"Customer"</th>
                                <th class="table__header-cell">"Invoice"</th>
                                <th class="table__header-cell">"Plan"</th>
                                <th class="table__header-cell">"Statement"</th>
                                <th class="table__header-cell">"Due"</th>
                                <th class="table__header-cell table__header-cell--right">"Amount due"</th>
                                <th class="table__header-cell table__header-cell--right">"Paid"</th>
                                <th class="table__header-cell table__header-cell--right">"Balance"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.visible().into_iter().map(|row| {
                                let account_no = row.account_no.clone();
                                let badge = format!("badge badge--{}", row.status.badge_modifier());
                                view! {
                                    <tr
                                        class="table__row table__row--clickable"
                                        on:click=move |_| open_customer(account_no.clone())
                                    >
                                        <td class="table__cell">{row.account_no.clone()}</td>
                                        <td class="table__cell">{row.full_name.clone()}</td>
                                        <td class="table__cell">{row.invoice_no.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{row.plan.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{row.statement_date.as_deref().map(format_date).unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{row.due_date.as_deref().map(format_date).unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell table__cell--right">{format_money(row.amount_due)}</td>
                                        <td class="table__cell table__cell--right">{format_money(row.amount_paid)}</td>
                                        <td class="table__cell table__cell--right">{format_money(row.balance)}</td>
                                        <td class="table__cell"><span class=badge>{row.status.as_str().to_string()}</span></td>
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
    use contracts::domain::a002_billing_record::BillingStatus;

    fn record(account_no: &str, balance: f64, status: BillingStatus) -> BillingRecord {
        BillingRecord {
            id: 1,
            account_no: account_no.to_string(),
            full_name: "Maria Santos".to_string(),
            invoice_no: Some("INV-2024-0042".to_string()),
            plan: Some("Fiber 100".to_string()),
            statement_date: None,
            due_date: None,
            amount_due: 1299.0,
            amount_paid: 1299.0 - balance,
            balance,
            status,
        }
    }

    #[test]
    fn test_search_matches_invoice_and_name() {
        let r = record("ACC-1001", 0.0, BillingStatus::Paid);
        assert!(r.matches_filter("inv-2024"));
        assert!(r.matches_filter("santos"));
        assert!(!r.matches_filter("garcia"));
    }

    #[test]
    fn test_outstanding_total_skips_settled() {
        let records = vec![
            record("A", 0.0, BillingStatus::Paid),
            record("B", 500.0, BillingStatus::Partial),
            record("C", 1299.0, BillingStatus::Overdue),
        ];
        assert_eq!(outstanding_total(&records), 1799.0);
    }
}
