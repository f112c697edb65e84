use crate::shared::api_client;
use contracts::domain::a001_pppoe_pattern::{PppoePattern, SavePlan};
use contracts::shared::ApiError;

const PATH: &str = "/pppoe-patterns";

pub async fn fetch_patterns() -> Result<Vec<PppoePattern>, ApiError> {
    api_client::get_data(PATH).await
}

/// PUT for an existing pattern of the type, POST otherwise.
pub async fn execute_save(plan: &SavePlan) -> Result<(), ApiError> {
    match plan {
        SavePlan::Update { id, dto } => api_client::put_json(&format!("{}/{}", PATH, id), dto).await,
        SavePlan::Create { dto } => api_client::post_json(PATH, dto).await,
    }
}

pub async fn delete_pattern(id: i64) -> Result<(), ApiError> {
    api_client::delete(&format!("{}/{}", PATH, id)).await
}
