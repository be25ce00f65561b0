use crate::{AuthUser, Role};

/// Outcome of checking a signed-in user against a guarded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    /// No session: send the visitor to the login page.
    SignIn,
    /// Signed in with the wrong role: send them home.
    Denied,
}

/// Decide whether `user` may open a page that requires `required`.
///
/// `None` means any signed-in user. Roles must match exactly, so an admin
/// is not let into staff-only pages.
pub fn route_access(user: Option<&AuthUser>, required: Option<Role>) -> RouteAccess {
    match (user, required) {
        (None, _) => RouteAccess::SignIn,
        (Some(_), None) => RouteAccess::Allow,
        (Some(u), Some(role)) if u.role == role => RouteAccess::Allow,
        (Some(_), Some(_)) => RouteAccess::Denied,
    }
}

/// Blocked citizens keep read access but may not file new reports.
pub fn can_report(user: &AuthUser) -> bool {
    user.role == Role::Citizen && !user.is_blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubscriptionStatus;

    fn user(role: Role) -> AuthUser {
        AuthUser {
            id: "u1".into(),
            name: "Test".into(),
            email: "test@example.com".into(),
            photo_url: None,
            role,
            is_blocked: false,
            subscription_status: SubscriptionStatus::Free,
            created_at: None,
        }
    }

    #[test]
    fn anonymous_must_sign_in() {
        assert_eq!(route_access(None, None), RouteAccess::SignIn);
        assert_eq!(route_access(None, Some(Role::Admin)), RouteAccess::SignIn);
    }

    #[test]
    fn any_signed_in_user_passes_open_pages() {
        for role in [Role::Citizen, Role::Staff, Role::Admin] {
            assert_eq!(route_access(Some(&user(role)), None), RouteAccess::Allow);
        }
    }

    #[test]
    fn exact_role_required() {
        let admin = user(Role::Admin);
        assert_eq!(route_access(Some(&admin), Some(Role::Admin)), RouteAccess::Allow);
        assert_eq!(route_access(Some(&admin), Some(Role::Staff)), RouteAccess::Denied);
        assert_eq!(route_access(Some(&admin), Some(Role::Citizen)), RouteAccess::Denied);

        let staff = user(Role::Staff);
        assert_eq!(route_access(Some(&staff), Some(Role::Staff)), RouteAccess::Allow);
        assert_eq!(route_access(Some(&staff), Some(Role::Admin)), RouteAccess::Denied);
    }

    #[test]
    fn blocked_citizen_cannot_report() {
        let mut citizen = user(Role::Citizen);
        assert!(can_report(&citizen));
        citizen.is_blocked = true;
        assert!(!can_report(&citizen));
        assert!(!can_report(&user(Role::Staff)));
    }
}
