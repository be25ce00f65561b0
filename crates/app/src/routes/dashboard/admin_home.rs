use dioxus::prelude::*;
use shared_types::{AppError, CURRENCY};
use shared_ui::{PageHeader, PageSubtitle, PageTitle, Skeleton, StatCard, StatGrid, StatTone};

use crate::auth::use_session_expiry;
use crate::format_helpers::format_amount;

#[component]
pub fn AdminHome() -> Element {
    let stats = use_resource(move || async move { server::api::admin_stats().await });
    use_session_expiry(stats);

    rsx! {
        PageHeader {
            PageTitle { "Platform Overview" }
            PageSubtitle { "Counts across every citizen, issue and payment" }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                StatGrid {
                    StatCard { label: "Total Users", value: s.total_users.to_string() }
                    StatCard { label: "Total Issues", value: s.total_issues.to_string(), tone: StatTone::Info }
                    StatCard { label: "Resolved Issues", value: s.resolved_issues.to_string(), tone: StatTone::Success }
                    StatCard {
                        label: "Total Payments",
                        value: format_amount(s.total_payments),
                        tone: StatTone::Warning,
                        hint: format!("Collected in {CURRENCY}"),
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
