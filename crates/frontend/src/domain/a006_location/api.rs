use crate::shared::api_client;
use contracts::domain::a006_location::{City, Region};
use contracts::shared::ApiError;

pub async fn fetch_regions() -> Result<Vec<Region>, ApiError> {
    api_client::get_data("/regions").await
}

pub async fn fetch_cities() -> Result<Vec<City>, ApiError> {
    api_client::get_data("/cities").await
}
