use dioxus::prelude::*;
use shared_ui::Skeleton;

use crate::auth::use_current_role;
use crate::routes::Route;

/// `/dashboard` has no content of its own; send the user to their role's home.
#[component]
pub fn DashboardIndex() -> Element {
    let role = use_current_role();

    use_effect(move || {
        if let Some(role) = role {
            navigator().replace(Route::role_home(role));
        }
    });

    rsx! {
        Skeleton { style: "height: 8rem" }
    }
}
