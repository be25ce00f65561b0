use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClipboardList, LdShield, LdUserCheck, LdWrench};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, ButtonVariant, SkeletonGrid};

use crate::components::IssueCard;
use crate::routes::Route;

/// Landing page: hero banner, recently resolved issues and the four-step
/// explainer.
#[component]
pub fn Home() -> Element {
    let featured =
        use_server_future(move || async move { server::api::list_featured_issues().await })?;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "home-hero",
            div { class: "home-hero-text",
                h1 { "Make your city better, one report at a time" }
                p {
                    "Spotted a pothole, a broken streetlight or an overflowing bin? "
                    "Report it, follow its progress and see it fixed."
                }
                div { class: "home-hero-actions",
                    Link { to: Route::AddIssue {},
                        Button { size: ButtonSize::Large, "Report an Issue" }
                    }
                    Link { to: Route::AllIssues {},
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Large, "Browse Issues" }
                    }
                }
            }
        }

        section { class: "home-section",
            h2 { class: "home-section-title", "Recently Resolved Issues" }
            match &*featured.read() {
                Some(Ok(issues)) if issues.is_empty() => rsx! {
                    p { class: "home-empty", "No resolved issues yet. Be the first!" }
                },
                Some(Ok(issues)) => rsx! {
                    div { class: "issue-grid",
                        for issue in issues.iter() {
                            IssueCard { key: "{issue.id}", issue: issue.clone() }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "home-empty",
                        "{shared_types::AppError::friendly_message(&e.to_string())}"
                    }
                },
                None => rsx! {
                    SkeletonGrid { count: 3 }
                },
            }
        }

        section { class: "home-section",
            h2 { class: "home-section-title", "How It Works" }
            ol { class: "home-steps",
                li { class: "home-step",
                    Icon::<LdClipboardList> { icon: LdClipboardList, width: 28, height: 28 }
                    h3 { "Report Issue" }
                    p { "Citizens submit the problem with a photo and location." }
                }
                li { class: "home-step",
                    Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                    h3 { "Admin Reviews" }
                    p { "An administrator checks the report and rejects duplicates." }
                }
                li { class: "home-step",
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 28, height: 28 }
                    h3 { "Staff Assigned" }
                    p { "The issue is handed to a staff member who owns the fix." }
                }
                li { class: "home-step",
                    Icon::<LdWrench> { icon: LdWrench, width: 28, height: 28 }
                    h3 { "Issue Resolved" }
                    p { "Staff update the status until the work is done." }
                }
            }
        }

        section { class: "home-section",
            h2 { class: "home-section-title", "Why CityGuard" }
            div { class: "home-features",
                div { class: "home-feature",
                    h3 { "Live tracking" }
                    p { "Every status change is recorded on the issue timeline." }
                }
                div { class: "home-feature",
                    h3 { "Community upvotes" }
                    p { "Neighbours upvote the problems that matter most to them." }
                }
                div { class: "home-feature",
                    h3 { "Priority boost" }
                    p { "Boost an urgent report to high priority for a small fee." }
                }
                div { class: "home-feature",
                    h3 { "Accountable staff" }
                    p { "Each issue has a named staff member responsible for it." }
                }
            }
        }
    }
}
