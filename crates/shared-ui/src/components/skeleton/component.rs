use dioxus::prelude::*;

/// Loading placeholder with an animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "cg-skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Grid of card-shaped skeletons for issue lists.
#[component]
pub fn SkeletonGrid(#[props(default = 6)] count: usize) -> Element {
    rsx! {
        div { class: "cg-skeleton-grid",
            for i in 0..count {
                Skeleton { key: "{i}", class: "cg-skeleton-card" }
            }
        }
    }
}
