use crate::shared::api_client;
use contracts::domain::a010_customer::CustomerDetail;
use contracts::shared::ApiError;

pub async fn fetch_customer(account_no: &str) -> Result<CustomerDetail, ApiError> {
    let path = format!("/customer-detail/{}", urlencoding::encode(account_no.trim()));
    api_client::get_data(&path).await
}
