use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, PageActions, PageHeader, PageTitle, Skeleton, StatCard, StatGrid, StatTone,
};

use crate::auth::use_session_expiry;
use crate::routes::Route;

#[component]
pub fn CitizenHome() -> Element {
    let stats = use_resource(move || async move { server::api::citizen_stats().await });
    use_session_expiry(stats);

    rsx! {
        PageHeader {
            PageTitle { "My Reports" }
            PageActions {
                Link { to: Route::AddIssue {}, Button { "Report Issue" } }
            }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                StatGrid {
                    StatCard { label: "Total Issues", value: s.total.to_string() }
                    StatCard { label: "Pending", value: s.pending.to_string(), tone: StatTone::Warning }
                    StatCard { label: "In Progress", value: s.in_progress.to_string(), tone: StatTone::Info }
                    StatCard { label: "Resolved", value: s.resolved.to_string(), tone: StatTone::Success }
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
