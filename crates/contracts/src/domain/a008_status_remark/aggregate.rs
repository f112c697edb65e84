use serde::{Deserialize, Serialize};

/// Canned remark attached to job orders when their status changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRemark {
    pub id: i64,
    pub status_remarks: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
