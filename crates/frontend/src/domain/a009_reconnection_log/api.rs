use crate::shared::api_client;
use contracts::domain::a009_reconnection_log::ReconnectionLog;
use contracts::shared::ApiError;

pub async fn fetch_logs() -> Result<Vec<ReconnectionLog>, ApiError> {
    api_client::get_data("/reconnection-logs").await
}
