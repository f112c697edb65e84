use crate::shared::api_client;
use contracts::domain::a003_inventory::{InventoryItem, InventoryItemDto};
use contracts::shared::ApiError;

const PATH: &str = "/inventory";

pub async fn fetch_items() -> Result<Vec<InventoryItem>, ApiError> {
    api_client::get_data(PATH).await
}

/// Update when the form carries an id, create otherwise.
pub async fn save_item(dto: &InventoryItemDto) -> Result<(), ApiError> {
    match dto.id {
        Some(id) => api_client::put_json(&format!("{}/{}", PATH, id), dto).await,
        None => api_client::post_json(PATH, dto).await,
    }
}

pub async fn delete_item(id: i64) -> Result<(), ApiError> {
    api_client::delete(&format!("{}/{}", PATH, id)).await
}
