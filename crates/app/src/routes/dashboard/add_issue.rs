use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{can_report, AppError, CreateIssueRequest};
use shared_ui::{use_toast, PageHeader, PageSubtitle, PageTitle, ToastOptions};

use crate::auth::{expire_session_on, use_auth};
use crate::components::IssueForm;
use crate::routes::Route;

#[component]
pub fn AddIssue() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut busy = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let allowed = auth
        .current_user
        .read()
        .as_ref()
        .map(can_report)
        .unwrap_or(false);

    let handle_submit = move |req: CreateIssueRequest| {
        spawn(async move {
            busy.set(true);
            field_errors.set(HashMap::new());
            match server::api::create_issue(req).await {
                Ok(issue) => {
                    tracing::info!(issue_id = %issue.id, "Issue reported");
                    toast.success("Issue reported".to_string(), ToastOptions::new());
                    navigator().push(Route::MyIssues {});
                }
                Err(e) => {
                    expire_session_on(auth, &e);
                    let err_str = e.to_string();
                    let fe = AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        toast.error(AppError::friendly_message(&err_str), ToastOptions::new());
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Report an Issue" }
            PageSubtitle { "Describe the problem and where it is. A photo helps staff find it." }
        }

        if allowed {
            IssueForm {
                submit_label: "Submit Report",
                busy: busy(),
                field_errors: field_errors(),
                on_submit: handle_submit,
            }
        } else {
            div { class: "blocked-notice",
                h3 { "Reporting disabled" }
                p { "Your account has been blocked by an administrator. Contact support@cityguard.com to appeal." }
            }
        }
    }
}
