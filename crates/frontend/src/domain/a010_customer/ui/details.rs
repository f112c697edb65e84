use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{customer_detail_key, detail_tab_label};
use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::mounted::MountGuard;
use contracts::projections::p900_billing_detail::BillingDetail;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn billing_day_text(day: Option<u8>) -> String {
    match day {
        Some(d) => format!("Every {}", ordinal(d)),
        None => "-".to_string(),
    }
}

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[component]
fn Field(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-grid__item">
            <div class="detail-grid__label">{label}</div>
            <div class="detail-grid__value">{value}</div>
        </div>
    }
}

/// Billing detail of one account, opened as its own tab.
#[component]
pub fn CustomerBillingDetail(account_no: String, on_close: Callback<()>) -> impl IntoView {
    let detail = RwSignal::new(None::<BillingDetail>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let guard = MountGuard::new();
    let account = StoredValue::new(account_no);
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    let fetch = move || {
        loading.set(true);
        error.set(None);
        let guard = guard.clone();
        let account_no = account.get_value();
        spawn_local(async move {
            let result = api::fetch_customer(&account_no).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(customer) => {
                    let billing = BillingDetail::from(&customer);
                    ctx.update_tab_title(
                        &customer_detail_key(&account_no),
                        &detail_tab_label("Customer", &billing.customer_name),
                    );
                    detail.set(Some(billing));
                }
                Err(e) => error.set(Some(format!("Failed to load account {}: {}", account_no, e))),
            }
            loading.set(false);
        });
    };
    let fetch = StoredValue::new(fetch);
    fetch.with_value(|f| f());

    view! {
        <div class="page">
            <PageHeader
                title=format!("Account {}", account.get_value())
                subtitle=Signal::derive(move || detail.with(|d| d.as_ref().map(|d| d.customer_name.clone())))
            >
                <button class="button button--secondary" on:click=move |_| fetch.with_value(|f| f())>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    "Close"
                </button>
            </PageHeader>

            <ErrorBanner
                message=error
                on_retry=Callback::new(move |_| fetch.with_value(|f| f()))
                on_dismiss=Callback::new(move |_| error.set(None))
            />

            <Show when=move || loading.get()>
                <div class="loading">"Loading billing detail..."</div>
            </Show>

            {move || detail.get().map(|d| {
                let balance_class = if d.has_balance() { "amount amount--due" } else { "amount" };
                let installed = if d.date_installed == "-" { d.date_installed.clone() } else { format_date(&d.date_installed) };
                view! {
                    <section class="detail-card">
                        <h3 class="detail-card__title">"Customer"</h3>
                        <div class="detail-grid">
                            <Field label="Name" value=d.customer_name.clone() />
                            <Field label="Account" value=d.account_no.clone() />
                            <Field label="Address" value=d.address.clone() />
                            <Field label="Contact" value=d.contact.clone() />
                            <Field label="Email" value=d.email.clone() />
                        </div>
                    </section>
                    <section class="detail-card">
                        <h3 class="detail-card__title">"Billing"</h3>
                        <div class="detail-grid">
                            <Field label="Plan" value=d.plan.clone() />
                            <Field label="Monthly fee" value=format_money(d.monthly_fee) />
                            <div class="detail-grid__item">
                                <div class="detail-grid__label">"Balance"</div>
                                <div class=balance_class>{format_money(d.account_balance)}</div>
                            </div>
                            <Field label="Status" value=d.billing_status.clone() />
                            <Field label="Billing day" value=billing_day_text(d.billing_day) />
                        </div>
                    </section>
                    <section class="detail-card">
                        <h3 class="detail-card__title">"Connection"</h3>
                        <div class="detail-grid">
                            <Field label="LCP / NAP / Port" value=d.lcp_nap_port.clone() />
                            <Field label="PPPoE username" value=d.pppoe_username.clone() />
                            <Field label="Installed" value=installed />
                        </div>
                    </section>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_day_text() {
        assert_eq!(billing_day_text(Some(1)), "Every 1st");
        assert_eq!(billing_day_text(Some(12)), "Every 12th");
        assert_eq!(billing_day_text(Some(22)), "Every 22nd");
        assert_eq!(billing_day_text(None), "-");
    }
}
