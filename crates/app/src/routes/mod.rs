pub mod all_issues;
pub mod dashboard;
pub mod home;
pub mod issue_detail;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClipboardList, LdCreditCard, LdHouse, LdLayoutDashboard, LdList, LdLogOut, LdMenu, LdMoon,
    LdPlus, LdSun, LdUser, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Button, ButtonVariant, DropdownMenu,
    DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator,
    DropdownMenuTrigger, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader,
    SidebarInset, SidebarMenuButton, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use crate::auth::{sign_out, use_auth};
use crate::guard::{AdminArea, CitizenArea, RequireSession, StaffArea};

use all_issues::AllIssues;
use dashboard::{
    AddIssue, AdminHome, AdminIssues, AdminPayments, AssignedIssues, CitizenHome,
    DashboardIndex, EditIssue, ManageStaff, ManageUsers, MyIssues, Profile, StaffHome,
};
use home::Home;
use issue_detail::IssueDetail;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/all-issues")]
        AllIssues {},
        #[route("/login?:redirect")]
        Login { redirect: Option<String> },
        #[route("/register")]
        Register {},
        #[layout(RequireSession)]
            #[route("/issues/:id")]
            IssueDetail { id: String },
        #[end_layout]
    #[end_layout]

    #[nest("/dashboard")]
        #[layout(RequireSession)]
        #[layout(DashboardLayout)]
            #[route("/")]
            DashboardIndex {},
            #[route("/profile")]
            Profile {},

            // ── Citizen ──
            #[layout(CitizenArea)]
                #[route("/citizen-home")]
                CitizenHome {},
                #[route("/my-issues")]
                MyIssues {},
                #[route("/add-issue")]
                AddIssue {},
                #[route("/edit-issue/:id")]
                EditIssue { id: String },
            #[end_layout]

            // ── Staff ──
            #[layout(StaffArea)]
                #[route("/staff-home")]
                StaffHome {},
                #[route("/assigned-issues")]
                AssignedIssues {},
            #[end_layout]

            // ── Admin ──
            #[layout(AdminArea)]
                #[route("/admin-home")]
                AdminHome {},
                #[route("/manage-users")]
                ManageUsers {},
                #[route("/manage-staff")]
                ManageStaff {},
                #[route("/all-issues-admin")]
                AdminIssues {},
                #[route("/payments-admin")]
                AdminPayments {},
            #[end_layout]
        #[end_layout]
        #[end_layout]
    #[end_nest]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing page of a role's dashboard.
    pub fn role_home(role: Role) -> Route {
        match role {
            Role::Citizen => Route::CitizenHome {},
            Role::Staff => Route::StaffHome {},
            Role::Admin => Route::AdminHome {},
        }
    }
}

/// Theme state shared by both layouts, created on first use.
fn use_theme() -> ThemeState {
    use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::default()),
    })
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeState>();
    let is_dark = theme.mode.read().is_dark();

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            "aria-label": "Toggle dark mode",
            onclick: move |_| theme.toggle(),
            if is_dark {
                Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
            } else {
                Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
            }
        }
    }
}

/// Avatar button with the signed-in user's name, a dashboard link and logout.
#[component]
fn UserMenu() -> Element {
    let auth = use_auth();
    let Some(user) = auth.current_user.read().clone() else {
        return rsx! {};
    };

    rsx! {
        DropdownMenu {
            DropdownMenuTrigger {
                Avatar {
                    if let Some(url) = user.photo_url.clone() {
                        AvatarImage { src: url }
                    }
                    AvatarFallback { "{user.initial()}" }
                }
            }
            DropdownMenuContent {
                DropdownMenuLabel {
                    strong { "{user.display_name()}" }
                    span { "{user.email}" }
                }
                DropdownMenuSeparator {}
                DropdownMenuItem::<String> {
                    value: "dashboard".to_string(),
                    index: 0usize,
                    on_select: move |_: String| {
                        navigator().push(Route::DashboardIndex {});
                    },
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Dashboard"
                }
                DropdownMenuItem::<String> {
                    value: "logout".to_string(),
                    index: 1usize,
                    on_select: move |_: String| {
                        spawn(sign_out(auth));
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Logout"
                }
            }
        }
    }
}

/// Public layout: top navbar and footer around the page.
/// Login and register render bare.
#[component]
fn MainLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    use_theme();

    let bare = matches!(route, Route::Login { .. } | Route::Register {});
    if bare {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./layout.css") }
            main { class: "auth-shell", Outlet::<Route> {} }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "site-navbar",
            Link { to: Route::Home {}, class: "site-brand", "CityGuard" }
            nav { class: "site-nav",
                Link {
                    to: Route::Home {},
                    class: if matches!(route, Route::Home {}) { "site-nav-link active" } else { "site-nav-link" },
                    "Home"
                }
                Link {
                    to: Route::AllIssues {},
                    class: if matches!(route, Route::AllIssues {}) { "site-nav-link active" } else { "site-nav-link" },
                    "All Issues"
                }
            }
            div { class: "site-nav-end",
                ThemeToggle {}
                if auth.is_authenticated() {
                    UserMenu {}
                } else {
                    Link { to: Route::Login { redirect: None },
                        Button { variant: ButtonVariant::Primary, "Login" }
                    }
                }
            }
        }

        main { class: "site-main", Outlet::<Route> {} }

        footer { class: "site-footer",
            div { class: "site-footer-brand",
                strong { "CityGuard" }
                p { "Report, track and resolve public infrastructure issues in your city." }
            }
            div { class: "site-footer-contact",
                h4 { "Contact" }
                a { href: "mailto:support@cityguard.com", "support@cityguard.com" }
            }
            p { class: "site-footer-copy", "© CityGuard. All rights reserved." }
        }
    }
}

/// Dashboard layout: role-aware sidebar plus a slim top bar.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    use_theme();

    let role = auth.role().unwrap_or_default();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    let page_title = match &route {
        Route::DashboardIndex {} => "Dashboard",
        Route::Profile {} => "My Profile",
        Route::CitizenHome {} | Route::StaffHome {} | Route::AdminHome {} => "Overview",
        Route::MyIssues {} => "My Issues",
        Route::AddIssue {} => "Report Issue",
        Route::EditIssue { .. } => "Edit Issue",
        Route::AssignedIssues {} => "Assigned Issues",
        Route::ManageUsers {} => "Manage Users",
        Route::ManageStaff {} => "Manage Staff",
        Route::AdminIssues {} => "All Issues",
        Route::AdminPayments {} => "Payments",
        _ => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    Link { to: Route::Home {}, class: "sidebar-brand", "CityGuard" }
                    span { class: "sidebar-role", "{role.label()} dashboard" }
                }
                SidebarSeparator {}
                SidebarContent {
                    SidebarGroup { label: "Dashboard",
                        match role {
                            Role::Citizen => rsx! {
                                Link { to: Route::CitizenHome {},
                                    SidebarMenuButton { active: matches!(route, Route::CitizenHome {}),
                                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                        "Citizen Home"
                                    }
                                }
                                Link { to: Route::MyIssues {},
                                    SidebarMenuButton { active: matches!(route, Route::MyIssues {} | Route::EditIssue { .. }),
                                        Icon::<LdList> { icon: LdList, width: 18, height: 18 }
                                        "My Issues"
                                    }
                                }
                                Link { to: Route::AddIssue {},
                                    SidebarMenuButton { active: matches!(route, Route::AddIssue {}),
                                        Icon::<LdPlus> { icon: LdPlus, width: 18, height: 18 }
                                        "Report Issue"
                                    }
                                }
                            },
                            Role::Staff => rsx! {
                                Link { to: Route::StaffHome {},
                                    SidebarMenuButton { active: matches!(route, Route::StaffHome {}),
                                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                        "Staff Home"
                                    }
                                }
                                Link { to: Route::AssignedIssues {},
                                    SidebarMenuButton { active: matches!(route, Route::AssignedIssues {}),
                                        Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 }
                                        "Assigned Issues"
                                    }
                                }
                            },
                            Role::Admin => rsx! {
                                Link { to: Route::AdminHome {},
                                    SidebarMenuButton { active: matches!(route, Route::AdminHome {}),
                                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                        "Admin Home"
                                    }
                                }
                                Link { to: Route::AdminIssues {},
                                    SidebarMenuButton { active: matches!(route, Route::AdminIssues {}),
                                        Icon::<LdList> { icon: LdList, width: 18, height: 18 }
                                        "All Issues"
                                    }
                                }
                                Link { to: Route::ManageUsers {},
                                    SidebarMenuButton { active: matches!(route, Route::ManageUsers {}),
                                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                        "Manage Users"
                                    }
                                }
                                Link { to: Route::ManageStaff {},
                                    SidebarMenuButton { active: matches!(route, Route::ManageStaff {}),
                                        Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                        "Manage Staff"
                                    }
                                }
                                Link { to: Route::AdminPayments {},
                                    SidebarMenuButton { active: matches!(route, Route::AdminPayments {}),
                                        Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 }
                                        "Payments"
                                    }
                                }
                            },
                        }
                        Link { to: Route::Profile {},
                            SidebarMenuButton { active: matches!(route, Route::Profile {}),
                                Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                                "Profile"
                            }
                        }
                    }
                    SidebarSeparator {}
                    SidebarGroup { label: "Portal",
                        Link { to: Route::Home {},
                            SidebarMenuButton {
                                Icon::<LdHouse> { icon: LdHouse, width: 18, height: 18 }
                                "Home"
                            }
                        }
                        Link { to: Route::AllIssues {},
                            SidebarMenuButton {
                                Icon::<LdList> { icon: LdList, width: 18, height: 18 }
                                "All Issues"
                            }
                        }
                    }
                }
                SidebarFooter {
                    button {
                        class: "sidebar-logout",
                        r#type: "button",
                        onclick: move |_| {
                            spawn(sign_out(auth));
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Logout"
                    }
                }
            }

            SidebarInset {
                header { class: "dashboard-topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
                    }
                    h2 { class: "dashboard-topbar-title", "{page_title}" }
                    div { class: "dashboard-topbar-end",
                        span { class: "dashboard-topbar-user", "{name}" }
                        ThemeToggle {}
                        UserMenu {}
                    }
                }
                div { class: "page-content", Outlet::<Route> {} }
            }
        }
    }
}
