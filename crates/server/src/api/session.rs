// Server-only session helpers for server functions.
// These are shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::AppError;

use crate::auth::{cookies, SessionToken};
use crate::error_convert::AppErrorExt;
use crate::upstream::Caller;

/// Build the upstream `Caller` for the current request.
///
/// Reads the `SessionToken` injected by the session middleware, falling
/// back to cookie parsing, and picks up the `x-request-id` set by the
/// request-id layer so it can be forwarded.
pub(crate) fn current_caller() -> Caller {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return Caller::anonymous();
    };
    let parts = ctx.parts_mut();

    let token = parts
        .extensions
        .get::<SessionToken>()
        .map(|t| t.0.clone())
        .or_else(|| cookies::extract_session_token(&parts.headers));

    let request_id = parts
        .extensions
        .get::<tower_http::request_id::RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .map(str::to_string);

    Caller { token, request_id }
}

/// Like [`current_caller`] but fails with Unauthorized when there is no session.
pub(crate) fn require_session() -> Result<Caller, ServerFnError> {
    let caller = current_caller();
    if !caller.is_authenticated() {
        return Err(AppError::unauthorized("Please sign in to continue").into_server_fn_error());
    }
    Ok(caller)
}

/// Whether an upstream failure means the caller's token is dead. Anonymous
/// calls and 403s leave the session alone.
pub fn clears_session(caller: &Caller, err: &AppError) -> bool {
    err.is_unauthorized() && caller.is_authenticated()
}

/// Convert an upstream failure into a `ServerFnError`.
///
/// A 401 on an authenticated call means the token is dead, so the session
/// cookie is cleared and the browser falls back to signed-out.
pub(crate) fn upstream_error(caller: &Caller, err: AppError) -> ServerFnError {
    if clears_session(caller, &err) {
        tracing::info!("Remote API rejected session token, clearing cookie");
        cookies::schedule_clear_session();
    }
    err.into_server_fn_error()
}
