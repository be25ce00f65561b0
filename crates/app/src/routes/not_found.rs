use dioxus::prelude::*;
use shared_ui::Button;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            h2 { "Oops! Page not found." }
            p { "The page you are looking for does not exist or has been moved." }
            Link { to: Route::Home {},
                Button { "Back to Home" }
            }
        }
    }
}
