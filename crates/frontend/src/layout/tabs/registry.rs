//! Tab content registry: maps `tab.key` to the screen it renders.

use super::tab_labels::CUSTOMER_DETAIL_PREFIX;
use crate::dashboards::d400_monitor::ui::MonitorDashboard;
use crate::domain::a001_pppoe_pattern::ui::PppoePatternManager;
use crate::domain::a002_billing_record::ui::list::BillingRecordList;
use crate::domain::a003_inventory::ui::list::InventoryList;
use crate::domain::a004_email_template::ui::list::EmailTemplateList;
use crate::domain::a005_sms_template::ui::list::SmsTemplateList;
use crate::domain::a006_location::ui::list::LocationList;
use crate::domain::a007_lcp_nap_location::ui::list::LcpNapLocationList;
use crate::domain::a008_status_remark::ui::list::StatusRemarkList;
use crate::domain::a009_reconnection_log::ui::list::ReconnectionLogList;
use crate::domain::a010_customer::ui::{CustomerBillingDetail, CustomerLookup};
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of the tab with the given key.
///
/// Unknown keys get a placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "a001_pppoe_pattern" => view! { <PppoePatternManager /> }.into_any(),
        "a002_billing_record" => view! { <BillingRecordList /> }.into_any(),
        "a003_inventory" => view! { <InventoryList /> }.into_any(),
        "a004_email_template" => view! { <EmailTemplateList /> }.into_any(),
        "a005_sms_template" => view! { <SmsTemplateList /> }.into_any(),
        "a006_location" => view! { <LocationList /> }.into_any(),
        "a007_lcp_nap_location" => view! { <LcpNapLocationList /> }.into_any(),
        "a008_status_remark" => view! { <StatusRemarkList /> }.into_any(),
        "a009_reconnection_log" => view! { <ReconnectionLogList /> }.into_any(),
        "a010_customer" => view! { <CustomerLookup /> }.into_any(),
        k if k.starts_with(CUSTOMER_DETAIL_PREFIX) => {
            let account_no = k[CUSTOMER_DETAIL_PREFIX.len()..].to_string();
            view! {
                <CustomerBillingDetail
                    account_no=account_no
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }
        "d400_monitor" => view! { <MonitorDashboard /> }.into_any(),
        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
