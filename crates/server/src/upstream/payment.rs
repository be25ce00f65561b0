use reqwest::Method;
use shared_types::{AppError, CreatePaymentRequest, Payment};

use super::{ApiClient, Caller};

pub async fn list(api: &ApiClient, caller: &Caller) -> Result<Vec<Payment>, AppError> {
    let builder = api.request(Method::GET, "/payments", caller);
    api.send(builder).await
}

#[tracing::instrument(skip(api, caller), fields(amount = body.amount, purpose = ?body.purpose))]
pub async fn create(api: &ApiClient, caller: &Caller, body: &CreatePaymentRequest) -> Result<(), AppError> {
    let builder = api.request(Method::POST, "/payments", caller).json(body);
    api.send_empty(builder).await?;
    tracing::info!("Payment recorded");
    Ok(())
}
