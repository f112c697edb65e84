//! Billing detail projection of a customer account.
//!
//! Single mapping from [`CustomerDetail`] used by every screen that shows
//! billing information for an account.

use crate::domain::a010_customer::CustomerDetail;
use crate::shared::text::join_non_empty;
use serde::{Deserialize, Serialize};

const EMPTY: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingDetail {
    pub account_no: String,
    pub customer_name: String,
    pub address: String,
    pub contact: String,
    pub email: String,
    pub plan: String,
    pub monthly_fee: f64,
    pub account_balance: f64,
    pub billing_status: String,
    pub billing_day: Option<u8>,
    pub lcp_nap_port: String,
    pub pppoe_username: String,
    pub date_installed: String,
}

impl BillingDetail {
    pub fn has_balance(&self) -> bool {
        self.account_balance > 0.0
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

fn or_dash(value: String) -> String {
    if value.is_empty() {
        EMPTY.to_string()
    } else {
        value
    }
}

/// Display name: `full_name`, else first/middle/last, else the account number.
pub fn display_name(c: &CustomerDetail) -> String {
    let full = text(&c.full_name);
    if !full.is_empty() {
        return full.to_string();
    }
    let middle = text(&c.middle_initial);
    let middle = if middle.is_empty() || middle.ends_with('.') || middle.len() > 1 {
        middle.to_string()
    } else {
        format!("{}.", middle)
    };
    let joined = join_non_empty([text(&c.first_name), middle.as_str(), text(&c.last_name)], " ");
    if joined.is_empty() {
        c.account_no.clone()
    } else {
        joined
    }
}

impl From<&CustomerDetail> for BillingDetail {
    fn from(c: &CustomerDetail) -> Self {
        let address = join_non_empty(
            [text(&c.address), text(&c.barangay), text(&c.city), text(&c.region)],
            ", ",
        );
        let contact = join_non_empty(
            [text(&c.contact_number_primary), text(&c.contact_number_secondary)],
            " / ",
        );
        let lcp_nap_port = join_non_empty([text(&c.lcp), text(&c.nap), text(&c.port)], " / ");

        Self {
            account_no: c.account_no.clone(),
            customer_name: display_name(c),
            address: or_dash(address),
            contact: or_dash(contact),
            email: or_dash(text(&c.email_address).to_string()),
            plan: or_dash(text(&c.plan_name).to_string()),
            monthly_fee: c.monthly_fee.unwrap_or(0.0),
            account_balance: c.account_balance.unwrap_or(0.0),
            billing_status: or_dash(text(&c.billing_status).to_string()),
            billing_day: c.billing_day,
            lcp_nap_port: or_dash(lcp_nap_port),
            pppoe_username: or_dash(text(&c.pppoe_username).to_string()),
            date_installed: or_dash(text(&c.date_installed).to_string()),
        }
    }
}

impl From<CustomerDetail> for BillingDetail {
    fn from(c: CustomerDetail) -> Self {
        BillingDetail::from(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_full_mapping() {
        let customer = CustomerDetail {
            account_no: "202400123".into(),
            full_name: some("Maria L. Santos"),
            email_address: some("maria@example.com"),
            contact_number_primary: some("09171234567"),
            contact_number_secondary: some(" "),
            address: some("Blk 4 Lot 2"),
            barangay: some("Poblacion"),
            city: some("Tanauan"),
            region: some("CALABARZON"),
            plan_name: some("Fiber 100"),
            monthly_fee: Some(1299.0),
            account_balance: Some(250.0),
            billing_status: some("Active"),
            billing_day: Some(15),
            lcp: some("LCP-004"),
            nap: some("NAP-12"),
            port: some("3"),
            pppoe_username: some("msantos4567"),
            ..Default::default()
        };
        let detail = BillingDetail::from(&customer);
        assert_eq!(detail.customer_name, "Maria L. Santos");
        assert_eq!(detail.address, "Blk 4 Lot 2, Poblacion, Tanauan, CALABARZON");
        assert_eq!(detail.contact, "09171234567");
        assert_eq!(detail.lcp_nap_port, "LCP-004 / NAP-12 / 3");
        assert_eq!(detail.billing_day, Some(15));
        assert_eq!(detail.date_installed, "-");
        assert!(detail.has_balance());
    }

    #[test]
    fn test_name_fallbacks() {
        let mut customer = CustomerDetail {
            account_no: "A-1".into(),
            first_name: some("Juan"),
            middle_initial: some("D"),
            last_name: some("Cruz"),
            ..Default::default()
        };
        assert_eq!(display_name(&customer), "Juan D. Cruz");

        customer.middle_initial = None;
        assert_eq!(display_name(&customer), "Juan Cruz");

        customer.first_name = None;
        customer.last_name = Some("  ".into());
        assert_eq!(display_name(&customer), "A-1");
    }

    #[test]
    fn test_missing_fields_default() {
        let detail = BillingDetail::from(CustomerDetail {
            account_no: "X".into(),
            ..Default::default()
        });
        assert_eq!(detail.monthly_fee, 0.0);
        assert_eq!(detail.account_balance, 0.0);
        assert_eq!(detail.address, "-");
        assert_eq!(detail.lcp_nap_port, "-");
        assert!(!detail.has_balance());
    }
}
