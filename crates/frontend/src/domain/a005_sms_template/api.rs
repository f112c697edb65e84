use crate::shared::api_client;
use contracts::domain::a005_sms_template::{SmsTemplate, SmsTemplateDto};
use contracts::shared::ApiError;

const PATH: &str = "/sms-templates";

pub async fn fetch_templates() -> Result<Vec<SmsTemplate>, ApiError> {
    api_client::get_data(PATH).await
}

pub async fn save_template(dto: &SmsTemplateDto) -> Result<(), ApiError> {
    match dto.id {
        Some(id) => api_client::put_json(&format!("{}/{}", PATH, id), dto).await,
        None => api_client::post_json(PATH, dto).await,
    }
}

pub async fn delete_template(id: i64) -> Result<(), ApiError> {
    api_client::delete(&format!("{}/{}", PATH, id)).await
}
