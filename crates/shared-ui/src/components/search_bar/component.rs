use dioxus::prelude::*;

/// Filter row above issue lists. Wraps inputs, selects and buttons.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cg-search-bar", role: "search",
            {children}
        }
    }
}
