use crate::shared::api_client;
use contracts::domain::a002_billing_record::BillingRecord;
use contracts::shared::ApiError;

pub async fn fetch_billing_records() -> Result<Vec<BillingRecord>, ApiError> {
    api_client::get_data("/billing-records").await
}
