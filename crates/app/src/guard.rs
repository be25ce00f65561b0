//! Route guards. Each is a router layout that renders its children only when
//! the signed-in user passes [`route_access`].

use dioxus::prelude::*;
use shared_types::{route_access, Role, RouteAccess};

use crate::auth::{refresh_session, use_auth};
use crate::routes::Route;

/// Any signed-in user. Anonymous visitors go to the login page and come
/// back to the page they asked for.
#[component]
pub fn RequireSession() -> Element {
    let auth = use_auth();
    let path = use_route::<Route>().to_string();

    // Re-check the account on every guarded navigation.
    use_effect(use_reactive((&path,), move |(path,)| {
        tracing::trace!(%path, "Refreshing session for guarded page");
        spawn(refresh_session(auth));
    }));

    rsx! {
        Gate { required: None }
    }
}

#[component]
pub fn CitizenArea() -> Element {
    rsx! {
        Gate { required: Some(Role::Citizen) }
    }
}

#[component]
pub fn StaffArea() -> Element {
    rsx! {
        Gate { required: Some(Role::Staff) }
    }
}

#[component]
pub fn AdminArea() -> Element {
    rsx! {
        Gate { required: Some(Role::Admin) }
    }
}

#[component]
fn Gate(#[props(!optional)] required: Option<Role>) -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let access = route_access(auth.current_user.read().as_ref(), required);

    match access {
        RouteAccess::Allow => rsx! { Outlet::<Route> {} },
        RouteAccess::SignIn => {
            navigator().replace(Route::Login {
                redirect: Some(route.to_string()),
            });
            rsx! {
                div { class: "guard-redirect",
                    p { "Redirecting to login..." }
                }
            }
        }
        RouteAccess::Denied => {
            tracing::debug!(?required, path = %route, "Role mismatch, sending home");
            navigator().replace(Route::Home {});
            rsx! {
                div { class: "guard-redirect",
                    p { "You do not have access to this page." }
                }
            }
        }
    }
}
