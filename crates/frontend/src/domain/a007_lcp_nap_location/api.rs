use crate::shared::api_client;
use contracts::domain::a007_lcp_nap_location::LcpNapLocation;
use contracts::shared::ApiError;

pub async fn fetch_locations() -> Result<Vec<LcpNapLocation>, ApiError> {
    api_client::get_data("/lcp-nap-locations").await
}
