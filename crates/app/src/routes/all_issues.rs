use dioxus::prelude::*;
use shared_types::{AppError, Category, IssueQuery, IssueStatus};
use shared_ui::{
    use_toast, FormSelect, Input, PageHeader, PageSubtitle, PageTitle, Pagination, SearchBar,
    SkeletonGrid, ToastOptions,
};

use crate::auth::{expire_session_on, use_auth, use_session_expiry};
use crate::components::IssueCard;
use crate::routes::Route;

/// Public issue browser with search, category and status filters.
#[component]
pub fn AllIssues() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| Option::<Category>::None);
    let mut status = use_signal(|| Option::<IssueStatus>::None);
    let mut page = use_signal(|| 1u32);

    let mut data = use_resource(move || {
        let query = IssueQuery::browse(&search(), category(), status(), page());
        async move { server::api::list_issues(query).await }
    });
    use_session_expiry(data);

    let email = auth.email();

    let handle_upvote = move |id: String| {
        if !auth.is_authenticated() {
            toast.error(
                "Please Login. You need to login to upvote.".to_string(),
                ToastOptions::new(),
            );
            navigator().push(Route::Login {
                redirect: Some(Route::AllIssues {}.to_string()),
            });
            return;
        }
        spawn(async move {
            match server::api::upvote_issue(id).await {
                Ok(()) => {
                    data.restart();
                    toast.success("Upvoted".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    expire_session_on(auth, &e);
                    toast.error(
                        AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "All Reported Issues" }
            PageSubtitle { "Browse what your neighbours have reported and upvote what matters." }
        }

        SearchBar {
            Input {
                placeholder: "Search by title or location...",
                value: search(),
                on_input: move |e: FormEvent| {
                    search.set(e.value());
                    page.set(1);
                },
            }
            FormSelect {
                value: category().map(|c| c.as_str().to_string()).unwrap_or_default(),
                onchange: move |e: FormEvent| {
                    let v = e.value();
                    category.set((!v.is_empty()).then(|| Category::from_str_or_default(&v)));
                    page.set(1);
                },
                option { value: "", "All Categories" }
                for c in Category::ALL {
                    option { value: c.as_str(), "{c.as_str()}" }
                }
            }
            FormSelect {
                value: status().map(|s| s.as_str().to_string()).unwrap_or_default(),
                onchange: move |e: FormEvent| {
                    let v = e.value();
                    status.set((!v.is_empty()).then(|| IssueStatus::from_str_or_default(&v)));
                    page.set(1);
                },
                option { value: "", "All Statuses" }
                for s in IssueStatus::ALL {
                    option { value: s.as_str(), "{s.label()}" }
                }
            }
        }

        match &*data.read() {
            Some(Ok(result)) if result.issues.is_empty() => rsx! {
                p { class: "empty-state", "No issues match your filters." }
            },
            Some(Ok(result)) => rsx! {
                div { class: "issue-grid",
                    for issue in result.issues.iter() {
                        IssueCard {
                            key: "{issue.id}",
                            issue: issue.clone(),
                            upvoted: issue.has_upvoted(&email),
                            on_upvote: handle_upvote,
                        }
                    }
                }
                Pagination { page, total_pages: result.total_pages }
            },
            Some(Err(e)) => rsx! {
                p { class: "empty-state error",
                    "{AppError::friendly_message(&e.to_string())}"
                }
            },
            None => rsx! {
                SkeletonGrid { count: 6 }
            },
        }
    }
}
