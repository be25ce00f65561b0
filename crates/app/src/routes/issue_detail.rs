use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMapPin, LdThumbsUp};
use dioxus_free_icons::Icon;
use shared_types::{AppError, FeatureFlags, Issue, BOOST_PRICE, CURRENCY};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Avatar, AvatarFallback,
    AvatarImage, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Skeleton,
    ToastOptions,
};

use crate::auth::{expire_session_on, use_auth, use_session_expiry};
use crate::components::{PriorityBadge, StatusBadge};
use crate::format_helpers::{format_date, format_datetime};
use crate::routes::Route;

/// Full view of one issue with the actions its viewer is allowed to take.
#[component]
pub fn IssueDetail(id: String) -> Element {
    let issue_id = id.clone();
    let mut data = use_resource(move || {
        let id = issue_id.clone();
        async move { server::api::get_issue(id).await }
    });
    use_session_expiry(data);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./issue_detail.css") }

        match &*data.read() {
            Some(Ok(issue)) => rsx! {
                IssueView { issue: issue.clone(), on_changed: move |_| data.restart() }
            },
            Some(Err(e)) => rsx! {
                div { class: "issue-detail-missing",
                    h2 { "Issue unavailable" }
                    p { "{AppError::friendly_message(&e.to_string())}" }
                    Link { to: Route::AllIssues {},
                        Button { variant: ButtonVariant::Outline, "Back to All Issues" }
                    }
                }
            },
            None => rsx! {
                div { class: "issue-detail",
                    Skeleton { class: "issue-detail-image" }
                    Skeleton { style: "height: 2rem; width: 60%" }
                    Skeleton { style: "height: 6rem" }
                }
            },
        }
    }
}

#[component]
fn IssueView(issue: Issue, on_changed: EventHandler<()>) -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let toast = use_toast();

    let mut confirm_delete = use_signal(|| false);
    let mut confirm_boost = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let email = auth.email();
    let can_edit = issue.can_edit_by(&email);
    let can_boost = flags.payments && issue.can_boost();
    let upvoted = issue.has_upvoted(&email);
    let timeline = issue.timeline_newest_first();

    let id_for_delete = issue.id.clone();
    let handle_delete = move |_: MouseEvent| {
        let id = id_for_delete.clone();
        confirm_delete.set(false);
        spawn(async move {
            busy.set(true);
            match server::api::delete_issue(id).await {
                Ok(()) => {
                    toast.success("Issue deleted".to_string(), ToastOptions::new());
                    navigator().push(Route::MyIssues {});
                }
                Err(e) => {
                    expire_session_on(auth, &e);
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
            busy.set(false);
        });
    };

    let id_for_boost = issue.id.clone();
    let handle_boost = move |_: MouseEvent| {
        let id = id_for_boost.clone();
        confirm_boost.set(false);
        spawn(async move {
            busy.set(true);
            match server::api::boost_issue(id).await {
                Ok(()) => {
                    on_changed.call(());
                    toast.success(
                        "Issue boosted to high priority".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    expire_session_on(auth, &e);
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
            busy.set(false);
        });
    };

    let id_for_upvote = issue.id.clone();
    let handle_upvote = move |_: MouseEvent| {
        let id = id_for_upvote.clone();
        spawn(async move {
            match server::api::upvote_issue(id).await {
                Ok(()) => on_changed.call(()),
                Err(e) => {
                    expire_session_on(auth, &e);
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
        });
    };

    let author_initial = issue
        .author
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    rsx! {
        article { class: "issue-detail",
            if !issue.image.is_empty() {
                img { class: "issue-detail-image", src: "{issue.image}", alt: "{issue.title}" }
            }

            div { class: "issue-detail-heading",
                h1 { "{issue.title}" }
                div { class: "issue-detail-badges",
                    PriorityBadge { priority: issue.priority }
                    StatusBadge { status: issue.status }
                    span { class: "issue-detail-category", "{issue.category.as_str()}" }
                }
            }

            div { class: "issue-detail-meta",
                div { class: "issue-detail-author",
                    Avatar {
                        if let Some(url) = issue.author.photo_url.clone() {
                            AvatarImage { src: url }
                        }
                        AvatarFallback { "{author_initial}" }
                    }
                    div {
                        strong { "{issue.author.name}" }
                        span { class: "issue-detail-muted",
                            "Reported on {format_date(issue.created_at.as_ref())}"
                        }
                    }
                }
                Button {
                    variant: if upvoted { ButtonVariant::Secondary } else { ButtonVariant::Outline },
                    onclick: handle_upvote,
                    Icon::<LdThumbsUp> { icon: LdThumbsUp, width: 16, height: 16 }
                    "{issue.upvote_count} Upvotes"
                }
            }

            section { class: "issue-detail-body",
                h3 { "Description" }
                p { "{issue.description}" }
                p { class: "issue-detail-location",
                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                    "{issue.location}"
                }
            }

            if can_edit || can_boost {
                div { class: "issue-detail-actions",
                    if can_edit {
                        Link { to: Route::EditIssue { id: issue.id.clone() },
                            Button { variant: ButtonVariant::Outline, disabled: busy(), "Edit" }
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            disabled: busy(),
                            onclick: move |_| confirm_delete.set(true),
                            "Delete"
                        }
                    }
                    if can_boost {
                        Button {
                            disabled: busy(),
                            onclick: move |_| confirm_boost.set(true),
                            "Boost Issue ({BOOST_PRICE}{CURRENCY})"
                        }
                    }
                }
            }

            div { class: "issue-detail-grid",
                Card {
                    CardHeader { CardTitle { "Assigned Staff" } }
                    CardContent {
                        match &issue.assigned_to {
                            Some(staff) => rsx! {
                                p { strong { "{staff.name}" } }
                                p { class: "issue-detail-muted", "{staff.email}" }
                            },
                            None => rsx! {
                                p { class: "issue-detail-muted", "Not assigned yet" }
                            },
                        }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Timeline" } }
                    CardContent {
                        if timeline.is_empty() {
                            p { class: "issue-detail-muted", "No updates yet." }
                        }
                        ol { class: "issue-timeline",
                            for (i, entry) in timeline.into_iter().enumerate() {
                                li { key: "{i}", class: "issue-timeline-entry",
                                    div { class: "issue-timeline-head",
                                        StatusBadge { status: entry.status }
                                        span { class: "issue-detail-muted",
                                            "{format_datetime(entry.date.as_ref())}"
                                        }
                                    }
                                    p { "{entry.message}" }
                                    if !entry.updated_by.is_empty() {
                                        span { class: "issue-timeline-by", "by {entry.updated_by}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        AlertDialogRoot {
            open: confirm_delete(),
            on_open_change: move |open: bool| confirm_delete.set(open),
            AlertDialogContent {
                AlertDialogTitle { "Delete this issue?" }
                AlertDialogDescription { "The report and its history will be removed permanently." }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_delete, "Delete" }
                }
            }
        }

        AlertDialogRoot {
            open: confirm_boost(),
            on_open_change: move |open: bool| confirm_boost.set(open),
            AlertDialogContent {
                AlertDialogTitle { "Boost this issue?" }
                AlertDialogDescription {
                    "Pay {BOOST_PRICE}{CURRENCY} to raise the issue to high priority."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_boost, "Pay {BOOST_PRICE}{CURRENCY}" }
                }
            }
        }
    }
}
