use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, ButtonVariant, PageActions, PageHeader, PageTitle, Skeleton, StatCard, StatGrid,
    StatTone,
};

use crate::auth::use_session_expiry;
use crate::routes::Route;

#[component]
pub fn StaffHome() -> Element {
    let stats = use_resource(move || async move { server::api::staff_stats().await });
    use_session_expiry(stats);

    rsx! {
        PageHeader {
            PageTitle { "My Workload" }
            PageActions {
                Link { to: Route::AssignedIssues {},
                    Button { variant: ButtonVariant::Outline, "View Assigned Issues" }
                }
            }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                StatGrid {
                    StatCard { label: "Assigned", value: s.assigned.to_string(), tone: StatTone::Info }
                    StatCard { label: "Resolved", value: s.resolved.to_string(), tone: StatTone::Success }
                    StatCard {
                        label: "Outstanding",
                        value: s.outstanding().to_string(),
                        tone: StatTone::Warning,
                        hint: "Assigned but not yet resolved".to_string(),
                    }
                }
            },
            Some(Err(e)) => rsx! {
                p { class: "empty-state error", "{AppError::friendly_message(&e.to_string())}" }
            },
            None => rsx! {
                Skeleton { style: "height: 6rem" }
            },
        }
    }
}
