use crate::shared::api_client;
use contracts::shared::ApiError;
use contracts::system::notifications::Notification;

pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    api_client::get_data("/notifications").await
}

pub async fn mark_read(id: i64) -> Result<(), ApiError> {
    api_client::put_json(&format!("/notifications/{}/read", id), &serde_json::json!({})).await
}
