use dioxus::prelude::*;
use shared_types::AuthUser;

#[cfg(feature = "server")]
use shared_types::Role;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::upstream::{self, get_client};

#[cfg(feature = "server")]
use super::session::*;

#[cfg(feature = "server")]
async fn list_by_role(role: Role) -> Result<Vec<AuthUser>, ServerFnError> {
    let caller = require_session()?;
    let users = upstream::user::list(get_client(), &caller)
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    Ok(with_role(users, role))
}

/// Keep only accounts holding exactly `role`.
#[cfg(feature = "server")]
pub fn with_role(users: Vec<AuthUser>, role: Role) -> Vec<AuthUser> {
    users.into_iter().filter(|u| u.role == role).collect()
}

/// Citizen accounts, for the manage-users page.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_citizens() -> Result<Vec<AuthUser>, ServerFnError> {
    list_by_role(Role::Citizen).await
}

/// Staff accounts, for manage-staff and the assignment picker.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_staff() -> Result<Vec<AuthUser>, ServerFnError> {
    list_by_role(Role::Staff).await
}

/// Block or unblock a citizen.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_user_blocked(id: String, blocked: bool) -> Result<(), ServerFnError> {
    let caller = require_session()?;
    upstream::user::set_blocked(get_client(), &caller, &id, blocked)
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    tracing::info!(user_id = %id, blocked, "User block state changed");
    Ok(())
}

/// Create a staff account.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn create_staff(name: String, email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use shared_types::CreateStaffRequest;

    let caller = require_session()?;
    let req = CreateStaffRequest {
        name: name.trim().to_string(),
        email: email.trim().to_lowercase(),
        password,
    };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    let staff = upstream::user::create_staff(get_client(), &caller, &req)
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    tracing::info!(user_id = %staff.id, "Staff account created");
    Ok(staff)
}

/// Delete a staff account.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_staff(id: String) -> Result<(), ServerFnError> {
    let caller = require_session()?;
    upstream::user::delete(get_client(), &caller, &id)
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    tracing::info!(user_id = %id, "Staff account deleted");
    Ok(())
}
