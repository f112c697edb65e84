use crate::shared::api_client;
use contracts::dashboards::d400_monitor::{MonitorMetric, MonitorSnapshot};
use contracts::shared::ApiError;

pub async fn fetch_snapshot(metric: MonitorMetric) -> Result<MonitorSnapshot, ApiError> {
    api_client::get_data(&format!("/monitor/{}", metric.path())).await
}
