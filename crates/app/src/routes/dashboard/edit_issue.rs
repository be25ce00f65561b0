use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, CreateIssueRequest, UpdateIssueRequest};
use shared_ui::{use_toast, Button, ButtonVariant, PageHeader, PageTitle, Skeleton, ToastOptions};

use crate::auth::{expire_session_on, use_auth, use_session_expiry};
use crate::components::IssueForm;
use crate::routes::Route;

/// Edit one of the citizen's own pending issues.
#[component]
pub fn EditIssue(id: String) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut busy = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let issue_id = id.clone();
    let data = use_resource(move || {
        let id = issue_id.clone();
        async move { server::api::get_issue(id).await }
    });
    use_session_expiry(data);

    let submit_id = id.clone();
    let handle_submit = move |req: UpdateIssueRequest| {
        let id = submit_id.clone();
        spawn(async move {
            busy.set(true);
            field_errors.set(HashMap::new());
            match server::api::update_issue(id.clone(), req).await {
                Ok(_) => {
                    toast.success("Issue updated".to_string(), ToastOptions::new());
                    navigator().push(Route::IssueDetail { id });
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

    let email = auth.email();

    rsx! {
        PageHeader {
            PageTitle { "Edit Issue" }
        }

        match &*data.read() {
            Some(Ok(issue)) if issue.can_edit_by(&email) => rsx! {
                IssueForm {
                    initial: CreateIssueRequest {
                        title: issue.title.clone(),
                        category: issue.category,
                        location: issue.location.clone(),
                        image: issue.image.clone(),
                        description: issue.description.clone(),
                    },
                    submit_label: "Save Changes",
                    busy: busy(),
                    field_errors: field_errors(),
                    on_submit: handle_submit,
                }
            },
            Some(Ok(issue)) => rsx! {
                div { class: "blocked-notice",
                    h3 { "This issue can no longer be edited" }
                    p { "Only the author can edit an issue, and only while it is pending." }
                    Link { to: Route::IssueDetail { id: issue.id.clone() },
                        Button { variant: ButtonVariant::Outline, "View Issue" }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                p { class: "empty-state error", "{AppError::friendly_message(&e.to_string())}" }
            },
            None => rsx! {
                Skeleton { style: "height: 20rem" }
            },
        }
    }
}
