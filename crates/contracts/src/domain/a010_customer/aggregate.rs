use serde::{Deserialize, Serialize};

/// Payload of `GET /customer-detail/:accountNo`.
///
/// Most fields are optional: older accounts were migrated without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomerDetail {
    pub account_no: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_initial: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub contact_number_primary: Option<String>,
    #[serde(default)]
    pub contact_number_secondary: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub barangay: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub monthly_fee: Option<f64>,
    #[serde(default)]
    pub account_balance: Option<f64>,
    #[serde(default)]
    pub billing_status: Option<String>,
    #[serde(default)]
    pub billing_day: Option<u8>,
    #[serde(default)]
    pub lcp: Option<String>,
    #[serde(default)]
    pub nap: Option<String>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub pppoe_username: Option<String>,
    #[serde(default)]
    pub date_installed: Option<String>,
}
