//! Tab titles for every key the registry knows about.

pub const CUSTOMER_DETAIL_PREFIX: &str = "a010_customer_detail_";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_pppoe_pattern" => "PPPoE Patterns",
        "a002_billing_record" => "Billing Records",
        "a003_inventory" => "Inventory",
        "a004_email_template" => "Email Templates",
        "a005_sms_template" => "SMS Templates",
        "a006_location" => "Regions & Cities",
        "a007_lcp_nap_location" => "LCP / NAP Locations",
        "a008_status_remark" => "Status Remarks",
        "a009_reconnection_log" => "Reconnection Logs",
        "a010_customer" => "Customer Lookup",
        "d400_monitor" => "Live Monitor",
        _ => "",
    }
}

pub fn customer_detail_key(account_no: &str) -> String {
    format!("{}{}", CUSTOMER_DETAIL_PREFIX, account_no)
}

/// Title for any key, including per-record detail tabs.
/// Falls back to the key itself.
pub fn title_for_key(key: &str) -> String {
    if let Some(account_no) = key.strip_prefix(CUSTOMER_DETAIL_PREFIX) {
        return detail_tab_label("Customer", account_no);
    }
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

pub fn detail_tab_label(entity: &str, identifier: &str) -> String {
    if identifier.trim().is_empty() {
        entity.to_string()
    } else {
        format!("{} {}", entity, identifier.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_for_key() {
        assert_eq!(title_for_key("a003_inventory"), "Inventory");
        assert_eq!(title_for_key(&customer_detail_key("ACC-1001")), "Customer ACC-1001");
        assert_eq!(title_for_key("unknown_key"), "unknown_key");
    }
}
