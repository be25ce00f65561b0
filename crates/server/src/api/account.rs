use dioxus::prelude::*;
use shared_types::AuthUser;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::upstream::{self, get_client};

#[cfg(feature = "server")]
use super::session::*;

/// Sign in with email and password. Sets the HTTP-only session cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::cookies;
    use shared_types::LoginRequest;

    let req = LoginRequest {
        email: email.trim().to_lowercase(),
        password,
    };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    let caller = current_caller();
    let session = upstream::auth::login(get_client(), &caller, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_session_cookie(&session.token);
    tracing::info!(user_id = %session.user.id, role = session.user.role.as_str(), "User signed in");
    Ok(session.user)
}

/// Create a citizen account. Sets the HTTP-only session cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn register(
    name: String,
    email: String,
    password: String,
    photo_url: Option<String>,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::cookies;
    use shared_types::RegisterRequest;

    let req = RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_lowercase(),
        password,
        photo_url: photo_url.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
    };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    let caller = current_caller();
    let session = upstream::auth::register(get_client(), &caller, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_session_cookie(&session.token);
    tracing::info!(user_id = %session.user.id, "Citizen registered");
    Ok(session.user)
}

/// Get the signed-in user. Returns None without a session or when the
/// remote API no longer accepts the token.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use shared_types::AppErrorKind;

    let caller = current_caller();
    if !caller.is_authenticated() {
        return Ok(None);
    }

    match upstream::user::me(get_client(), &caller).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if matches!(e.kind, AppErrorKind::Unauthorized | AppErrorKind::NotFound) => {
            // Stale or revoked token: clear it so the client is not stuck half signed in
            crate::auth::cookies::schedule_clear_session();
            tracing::warn!(message = %e.message, "Session no longer valid, clearing cookie");
            Ok(None)
        }
        Err(e) => Err(e.into_server_fn_error()),
    }
}

/// Sign out by clearing the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    crate::auth::cookies::schedule_clear_session();
    Ok(())
}

/// Update the signed-in user's name and photo.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_profile(name: String, photo_url: Option<String>) -> Result<AuthUser, ServerFnError> {
    use shared_types::UpdateProfileRequest;

    let caller = require_session()?;
    let req = UpdateProfileRequest {
        name: name.trim().to_string(),
        photo_url: photo_url.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
    };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    upstream::user::update_me(get_client(), &caller, &req)
        .await
        .map_err(|e| upstream_error(&caller, e))
}
