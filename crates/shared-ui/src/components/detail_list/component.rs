use dioxus::prelude::*;

/// A container for label/value pairs in a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cg-detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// For plain text values, pass the `value` prop. For rich content such as
/// badges or links, use children instead.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "cg-detail-item",
            span { class: "cg-detail-item-label", "{label}" }
            span { class: "cg-detail-item-value",
                if has_children {
                    {children}
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

/// Two-column layout for the issue detail page: content left, sidebar right.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cg-detail-grid", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_is_rendered() {
        let html = dioxus_ssr::render_element(rsx! {
            DetailList {
                DetailItem { label: "Location", value: "Mirpur 10" }
            }
        });
        assert!(html.contains("Location"));
        assert!(html.contains("Mirpur 10"));
    }
}
