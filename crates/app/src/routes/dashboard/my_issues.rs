use dioxus::prelude::*;
use shared_types::{AppError, IssueStatus};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonSize, ButtonVariant,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, PageActions, PageHeader, PageTitle, Skeleton, ToastOptions,
};

use crate::auth::{expire_session_on, use_auth, use_session_expiry};
use crate::components::{PriorityBadge, StatusBadge};
use crate::format_helpers::format_date;
use crate::routes::Route;

/// The signed-in citizen's own reports.
#[component]
pub fn MyIssues() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut data = use_resource(move || async move { server::api::list_my_issues().await });
    use_session_expiry(data);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let handle_delete = move |_: MouseEvent| {
        let Some(id) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match server::api::delete_issue(id).await {
                Ok(()) => {
                    data.restart();
                    toast.success("Issue deleted".to_string(), ToastOptions::new());
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
            PageTitle { "My Issues" }
            PageActions {
                Link { to: Route::AddIssue {}, Button { "Report Issue" } }
            }
        }

        match &*data.read() {
            Some(Ok(issues)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Title" }
                        DataTableColumn { "Category" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Priority" }
                        DataTableColumn { "Reported" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        if issues.is_empty() {
                            DataTableEmpty { colspan: 6, message: "You have not reported any issues yet." }
                        }
                        for issue in issues.iter() {
                            DataTableRow { key: "{issue.id}",
                                DataTableCell { "{issue.title}" }
                                DataTableCell { "{issue.category.as_str()}" }
                                DataTableCell { StatusBadge { status: issue.status } }
                                DataTableCell { PriorityBadge { priority: issue.priority } }
                                DataTableCell { "{format_date(issue.created_at.as_ref())}" }
                                DataTableCell {
                                    div { class: "table-actions",
                                        Link { to: Route::IssueDetail { id: issue.id.clone() },
                                            Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "View" }
                                        }
                                        if issue.status == IssueStatus::Pending {
                                            Link { to: Route::EditIssue { id: issue.id.clone() },
                                                Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, "Edit" }
                                            }
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                size: ButtonSize::Small,
                                                onclick: {
                                                    let id = issue.id.clone();
                                                    move |_| pending_delete.set(Some(id.clone()))
                                                },
                                                "Delete"
                                            }
                                        }
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

        AlertDialogRoot {
            open: pending_delete.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    pending_delete.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Delete this issue?" }
                AlertDialogDescription { "Only pending issues can be deleted. This cannot be undone." }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_delete, "Delete" }
                }
            }
        }
    }
}
