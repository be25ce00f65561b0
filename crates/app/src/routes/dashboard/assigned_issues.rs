use dioxus::prelude::*;
use shared_types::{AppError, IssueStatus};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect, PageHeader,
    PageSubtitle, PageTitle, Skeleton, ToastOptions,
};

use crate::auth::{expire_session_on, use_auth, use_session_expiry};
use crate::components::{PriorityBadge, StatusBadge};
use crate::routes::Route;

/// Issues assigned to the signed-in staff member, with a status picker.
#[component]
pub fn AssignedIssues() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut data = use_resource(move || async move { server::api::list_assigned_issues().await });
    use_session_expiry(data);

    let change_status = move |id: String, value: String| {
        let status = IssueStatus::from_str_or_default(&value);
        if !IssueStatus::staff_options().contains(&status) {
            return;
        }
        spawn(async move {
            match server::api::update_issue_status(id, status).await {
                Ok(()) => {
                    data.restart();
                    toast.success(
                        format!("Status changed to {}", status.label()),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    expire_session_on(auth, &e);
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Assigned Issues" }
            PageSubtitle { "Move each issue along as the work progresses" }
        }

        match &*data.read() {
            Some(Ok(issues)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Title" }
                        DataTableColumn { "Location" }
                        DataTableColumn { "Priority" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Change Status" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        if issues.is_empty() {
                            DataTableEmpty { colspan: 6, message: "Nothing is assigned to you right now." }
                        }
                        for issue in issues.iter() {
                            DataTableRow { key: "{issue.id}",
                                DataTableCell { "{issue.title}" }
                                DataTableCell { "{issue.location}" }
                                DataTableCell { PriorityBadge { priority: issue.priority } }
                                DataTableCell { StatusBadge { status: issue.status } }
                                DataTableCell {
                                    FormSelect {
                                        value: issue.status.as_str().to_string(),
                                        onchange: {
                                            let id = issue.id.clone();
                                            move |e: FormEvent| change_status(id.clone(), e.value())
                                        },
                                        option {
                                            value: IssueStatus::Pending.as_str(),
                                            disabled: true,
                                            "{IssueStatus::Pending.label()}"
                                        }
                                        for s in IssueStatus::staff_options() {
                                            option { value: s.as_str(), "{s.label()}" }
                                        }
                                    }
                                }
                                DataTableCell {
                                    Link { to: Route::IssueDetail { id: issue.id.clone() },
                                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "View" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                p { class: "empty-state error", "{AppError::friendly_message(&e.to_string())}" }
            },
            None => rsx! {
                Skeleton { style: "height: 12rem" }
            },
        }
    }
}
