use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the dashboard sidebar is expanded. On narrow screens an open
/// sidebar overlays the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "cg-sidebar-provider",
            "data-sidebar-open": if (state)().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = (state)().open;

    let base = vec![
        Attribute::new("class", "cg-sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "cg-sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "cg-sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "cg-sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "cg-sidebar-footer", {children} }
    }
}

// ─── Groups and menus ──────────────────────────────────────────────────

#[component]
pub fn SidebarGroup(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        div { class: "cg-sidebar-group",
            if !label.is_empty() {
                div { class: "cg-sidebar-group-label", "{label}" }
            }
            ul { class: "cg-sidebar-menu", {children} }
        }
    }
}

/// Menu entry. Wrap in a router `Link` for navigation.
///
/// Clicking closes the sidebar. Above the mobile breakpoint the sidebar is
/// pinned open by CSS, so this only affects the overlay.
#[component]
pub fn SidebarMenuButton(#[props(default = false)] active: bool, children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li { class: "cg-sidebar-menu-item",
            span {
                class: "cg-sidebar-menu-button",
                "data-active": if active { "true" } else { "false" },
                onclick: move |_| state.set(SidebarState { open: false }),
                {children}
            }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Toggle button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "cg-sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let current = (state)().open;
                state.set(SidebarState { open: !current });
            },
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "cg-sidebar-separator" }
    }
}

/// The main content area that sits alongside the Sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "cg-sidebar-inset", {children} }
    }
}
