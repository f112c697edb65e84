use crate::shared::api_client;
use contracts::domain::a008_status_remark::StatusRemark;
use contracts::shared::ApiError;

pub async fn fetch_remarks() -> Result<Vec<StatusRemark>, ApiError> {
    api_client::get_data("/status-remarks").await
}
