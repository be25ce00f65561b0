use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, Role};

use crate::routes::Route;

/// Global authentication state.
///
/// Seeded once in `App` from `get_current_user` and updated by the login,
/// register, logout and profile pages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new(user: Option<AuthUser>) -> Self {
        Self {
            current_user: Signal::new(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.current_user.read().as_ref().map(|u| u.role)
    }

    /// Email of the signed-in user, or empty when signed out.
    pub fn email(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    }
}

/// Outcome of re-reading the signed-in user from the server.
#[derive(Debug, PartialEq)]
pub enum Refresh {
    /// The call failed for another reason; keep what we have.
    Keep,
    Replace(AuthUser),
    /// The server no longer recognises the session.
    SignOut,
}

impl Refresh {
    pub fn from_result(fetched: Result<Option<AuthUser>, ServerFnError>) -> Self {
        match fetched {
            Ok(Some(user)) => Refresh::Replace(user),
            Ok(None) => Refresh::SignOut,
            Err(e) if AppError::is_session_expired(&e.to_string()) => Refresh::SignOut,
            Err(_) => Refresh::Keep,
        }
    }
}

/// Re-read the signed-in user so role and block changes made elsewhere
/// apply without a reload. Clearing the user hands control to the guards.
pub async fn refresh_session(mut auth: AuthState) {
    match Refresh::from_result(server::api::get_current_user().await) {
        Refresh::Replace(user) => {
            if auth.current_user.peek().as_ref() != Some(&user) {
                tracing::debug!(user_id = %user.id, "Signed-in user changed on the server");
                auth.set_user(user);
            }
        }
        Refresh::SignOut => {
            if auth.is_authenticated() {
                tracing::info!("Session no longer valid, signing out locally");
                auth.clear_auth();
            }
        }
        Refresh::Keep => {}
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook returning the signed-in user's role.
pub fn use_current_role() -> Option<Role> {
    use_auth().role()
}

/// Sign out on the server, clear local state and go home.
pub async fn sign_out(mut auth: AuthState) {
    if let Err(e) = server::api::logout().await {
        tracing::warn!(error = %e, "Logout request failed");
    }
    auth.clear_auth();
    navigator().push(Route::Home {});
}

/// Drop the local user when a server call failed because the session was
/// rejected, then send the browser to login and back to the current page.
///
/// The server has already cleared the cookie by the time this runs.
/// Returns whether the error was a rejected session.
pub fn expire_session_on(mut auth: AuthState, error: &ServerFnError) -> bool {
    if !AppError::is_session_expired(&error.to_string()) {
        return false;
    }
    if auth.is_authenticated() {
        tracing::info!("Session rejected by the server, signing out locally");
        auth.clear_auth();
        let redirect = router().full_route_string();
        navigator().replace(Route::Login {
            redirect: Some(redirect),
        });
    }
    true
}

/// Watch a page's server resource and sign out locally once it fails with
/// a rejected session.
pub fn use_session_expiry<T: 'static>(resource: Resource<Result<T, ServerFnError>>) {
    let auth = use_auth();
    use_effect(move || {
        if let Some(Err(e)) = &*resource.read() {
            expire_session_on(auth, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(role: Role, blocked: bool) -> AuthUser {
        AuthUser {
            id: "u1".into(),
            name: "Nadia".into(),
            email: "nadia@example.com".into(),
            photo_url: None,
            role,
            is_blocked: blocked,
            subscription_status: Default::default(),
            created_at: None,
        }
    }

    #[test]
    fn refresh_replaces_user_with_server_copy() {
        let fresh = user(Role::Staff, true);
        assert_eq!(
            Refresh::from_result(Ok(Some(fresh.clone()))),
            Refresh::Replace(fresh)
        );
    }

    #[test]
    fn refresh_signs_out_when_session_is_gone() {
        assert_eq!(Refresh::from_result(Ok(None)), Refresh::SignOut);
        let expired = ServerFnError::new(
            r#"{"kind":"Unauthorized","message":"Please sign in again"}"#,
        );
        assert_eq!(Refresh::from_result(Err(expired)), Refresh::SignOut);
    }

    #[test]
    fn refresh_keeps_user_on_other_failures() {
        let outage = ServerFnError::new(
            r#"{"kind":"Upstream","message":"The CityGuard service is unreachable"}"#,
        );
        assert_eq!(Refresh::from_result(Err(outage)), Refresh::Keep);
        assert_eq!(
            Refresh::from_result(Err(ServerFnError::new("connection reset"))),
            Refresh::Keep
        );
    }
}
