use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, Issue, IssueStatus};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonSize, ButtonVariant,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel,
    DropdownMenuTrigger, PageHeader, PageTitle, Skeleton, ToastOptions,
};

use crate::auth::{expire_session_on, use_auth, use_session_expiry};
use crate::components::{PriorityBadge, StatusBadge};
use crate::routes::Route;

/// Every issue on the platform, with staff assignment and rejection.
#[component]
pub fn AdminIssues() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut issues = use_resource(move || async move { server::api::list_all_issues().await });
    use_session_expiry(issues);
    let staff = use_resource(move || async move { server::api::list_staff().await });
    use_session_expiry(staff);
    let mut pending_reject = use_signal(|| Option::<Issue>::None);

    let assign = move |issue_id: String, staff_id: String| {
        spawn(async move {
            match server::api::assign_issue(issue_id, staff_id).await {
                Ok(()) => {
                    issues.restart();
                    toast.success("Staff assigned".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    expire_session_on(auth, &e);
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
        });
    };

    let handle_reject = move |_: MouseEvent| {
        let Some(issue) = pending_reject() else {
            return;
        };
        pending_reject.set(None);
        spawn(async move {
            match server::api::reject_issue(issue.id).await {
                Ok(()) => {
                    issues.restart();
                    toast.success("Issue rejected".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    expire_session_on(auth, &e);
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
        });
    };

    let staff_list: Vec<AuthUser> = match &*staff.read() {
        Some(Ok(list)) => list.iter().filter(|s| !s.is_blocked).cloned().collect(),
        _ => Vec::new(),
    };

    let reject_title = pending_reject
        .read()
        .as_ref()
        .map(|i| i.title.clone())
        .unwrap_or_default();

    rsx! {
        PageHeader {
            PageTitle { "All Issues" }
        }

        match &*issues.read() {
            Some(Ok(list)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Title" }
                        DataTableColumn { "Status / Priority" }
                        DataTableColumn { "Upvotes" }
                        DataTableColumn { "Assigned To" }
                        DataTableColumn { "Action" }
                    }
                    DataTableBody {
                        if list.is_empty() {
                            DataTableEmpty { colspan: 5, message: "No issues have been reported yet." }
                        }
                        for issue in list.iter() {
                            DataTableRow { key: "{issue.id}",
                                DataTableCell {
                                    Link { to: Route::IssueDetail { id: issue.id.clone() }, "{issue.title}" }
                                }
                                DataTableCell {
                                    div { class: "table-badges",
                                        StatusBadge { status: issue.status }
                                        PriorityBadge { priority: issue.priority }
                                    }
                                }
                                DataTableCell { "{issue.upvote_count}" }
                                DataTableCell {
                                    match &issue.assigned_to {
                                        Some(person) => rsx! { "{person.name}" },
                                        None if issue.status == IssueStatus::Rejected => rsx! { "-" },
                                        None => rsx! {
                                            DropdownMenu {
                                                DropdownMenuTrigger {
                                                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "Assign Staff" }
                                                }
                                                DropdownMenuContent {
                                                    DropdownMenuLabel { "Choose a staff member" }
                                                    if staff_list.is_empty() {
                                                        DropdownMenuLabel { "No staff available" }
                                                    }
                                                    for (i, member) in staff_list.iter().enumerate() {
                                                        DropdownMenuItem::<String> {
                                                            key: "{member.id}",
                                                            value: member.id.clone(),
                                                            index: i,
                                                            on_select: {
                                                                let issue_id = issue.id.clone();
                                                                move |staff_id: String| assign(issue_id.clone(), staff_id)
                                                            },
                                                            "{member.display_name()}"
                                                        }
                                                    }
                                                }
                                            }
                                        },
                                    }
                                }
                                DataTableCell {
                                    if issue.status == IssueStatus::Pending {
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            size: ButtonSize::Small,
                                            onclick: {
                                                let issue = issue.clone();
                                                move |_| pending_reject.set(Some(issue.clone()))
                                            },
                                            "Reject"
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
            open: pending_reject.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    pending_reject.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Reject \"{reject_title}\"?" }
                AlertDialogDescription { "The reporter will see the issue as rejected. This cannot be undone." }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_reject, "Reject" }
                }
            }
        }
    }
}
