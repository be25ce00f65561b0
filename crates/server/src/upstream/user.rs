use reqwest::Method;
use shared_types::{AppError, AuthUser, BlockUserRequest, CreateStaffRequest, UpdateProfileRequest};

use super::{segment, ApiClient, Caller};

/// Profile of the account behind the caller's token.
pub async fn me(api: &ApiClient, caller: &Caller) -> Result<AuthUser, AppError> {
    let builder = api.request(Method::GET, "/users/me", caller);
    api.send(builder).await
}

pub async fn update_me(
    api: &ApiClient,
    caller: &Caller,
    body: &UpdateProfileRequest,
) -> Result<AuthUser, AppError> {
    let builder = api.request(Method::PATCH, "/users/me", caller).json(body);
    api.send(builder).await
}

/// Every account, all roles. Callers filter by role.
pub async fn list(api: &ApiClient, caller: &Caller) -> Result<Vec<AuthUser>, AppError> {
    let builder = api.request(Method::GET, "/users", caller);
    api.send(builder).await
}

pub async fn create_staff(
    api: &ApiClient,
    caller: &Caller,
    body: &CreateStaffRequest,
) -> Result<AuthUser, AppError> {
    let builder = api.request(Method::POST, "/users/staff", caller).json(body);
    api.send(builder).await
}

pub async fn delete(api: &ApiClient, caller: &Caller, id: &str) -> Result<(), AppError> {
    let builder = api.request(Method::DELETE, &format!("/users/{}", segment(id)), caller);
    api.send_empty(builder).await
}

pub async fn set_blocked(api: &ApiClient, caller: &Caller, id: &str, blocked: bool) -> Result<(), AppError> {
    let builder = api
        .request(Method::PATCH, &format!("/users/{}/block", segment(id)), caller)
        .json(&BlockUserRequest { is_blocked: blocked });
    api.send_empty(builder).await
}
