use serde::{Deserialize, Serialize};

/// Billing status as reported by the backend. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillingStatus {
    Paid,
    Unpaid,
    Partial,
    Overdue,
    Other(String),
}

impl From<String> for BillingStatus {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "paid" => BillingStatus::Paid,
            "unpaid" => BillingStatus::Unpaid,
            "partial" | "partially paid" => BillingStatus::Partial,
            "overdue" => BillingStatus::Overdue,
            _ => BillingStatus::Other(s),
        }
    }
}

impl From<BillingStatus> for String {
    fn from(s: BillingStatus) -> Self {
        s.as_str().to_string()
    }
}

impl Default for BillingStatus {
    fn default() -> Self {
        BillingStatus::Unpaid
    }
}

impl BillingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BillingStatus::Paid => "Paid",
            BillingStatus::Unpaid => "Unpaid",
            BillingStatus::Partial => "Partial",
            BillingStatus::Overdue => "Overdue",
            BillingStatus::Other(s) => s.as_str(),
        }
    }

    /// BEM modifier for the status badge.
    pub fn badge_modifier(&self) -> &'static str {
        match self {
            BillingStatus::Paid => "success",
            BillingStatus::Partial => "warning",
            BillingStatus::Overdue => "error",
            BillingStatus::Unpaid | BillingStatus::Other(_) => "neutral",
        }
    }
}

/// One statement line of `GET /billing-records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRecord {
    pub id: i64,
    pub account_no: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub invoice_no: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub statement_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub amount_due: f64,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub status: BillingStatus,
}

impl BillingRecord {
    pub fn is_settled(&self) -> bool {
        self.status == BillingStatus::Paid || self.balance <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_lenient() {
        let record: BillingRecord = serde_json::from_str(
            r#"{"id":1,"account_no":"202401","status":"PAID","balance":0}"#,
        )
        .unwrap();
        assert_eq!(record.status, BillingStatus::Paid);
        assert!(record.is_settled());

        let record: BillingRecord =
            serde_json::from_str(r#"{"id":2,"account_no":"202402","status":"On Hold","balance":150.5}"#)
                .unwrap();
        assert_eq!(record.status, BillingStatus::Other("On Hold".to_string()));
        assert_eq!(record.status.badge_modifier(), "neutral");
        assert!(!record.is_settled());
    }

    #[test]
    fn test_status_serializes_as_string() {
        let json = serde_json::to_value(BillingStatus::Overdue).unwrap();
        assert_eq!(json, serde_json::json!("Overdue"));
    }
}
