use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconnectionLog {
    pub id: i64,
    pub account_no: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub reconnection_fee: f64,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ReconnectionLog {
    pub fn total_fees(logs: &[ReconnectionLog]) -> f64 {
        logs.iter().map(|l| l.reconnection_fee).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_fees() {
        let logs: Vec<ReconnectionLog> = serde_json::from_str(
            r#"[{"id":1,"account_no":"A1","reconnection_fee":100},
                {"id":2,"account_no":"A2","reconnection_fee":250.5},
                {"id":3,"account_no":"A3"}]"#,
        )
        .unwrap();
        assert_eq!(ReconnectionLog::total_fees(&logs), 350.5);
    }
}
