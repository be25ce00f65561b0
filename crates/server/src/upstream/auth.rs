use reqwest::Method;
use shared_types::{AppError, LoginRequest, RegisterRequest, SessionResponse};

use super::{ApiClient, Caller};

/// Exchange credentials for a session token.
#[tracing::instrument(skip(api, caller, body), fields(email = %body.email))]
pub async fn login(api: &ApiClient, caller: &Caller, body: &LoginRequest) -> Result<SessionResponse, AppError> {
    let builder = api.request(Method::POST, "/auth/login", caller).json(body);
    api.send(builder).await
}

/// Create a citizen account and sign it in.
#[tracing::instrument(skip(api, caller, body), fields(email = %body.email))]
pub async fn register(
    api: &ApiClient,
    caller: &Caller,
    body: &RegisterRequest,
) -> Result<SessionResponse, AppError> {
    let builder = api.request(Method::POST, "/auth/register", caller).json(body);
    api.send(builder).await
}
