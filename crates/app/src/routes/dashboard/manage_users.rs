use dioxus::prelude::*;
use shared_types::{AppError, AuthUser};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonSize, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageTitle, Skeleton, ToastOptions,
};

use crate::auth::{expire_session_on, use_auth, use_session_expiry};
use crate::format_helpers::format_date;

/// Citizens list with block and unblock.
#[component]
pub fn ManageUsers() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut data = use_resource(move || async move { server::api::list_citizens().await });
    use_session_expiry(data);
    let mut pending = use_signal(|| Option::<AuthUser>::None);

    let handle_confirm = move |_: MouseEvent| {
        let Some(user) = pending() else {
            return;
        };
        pending.set(None);
        let block = !user.is_blocked;
        spawn(async move {
            match server::api::set_user_blocked(user.id.clone(), block).await {
                Ok(()) => {
                    data.restart();
                    let verb = if block { "blocked" } else { "unblocked" };
                    toast.success(
                        format!("{} {verb}", user.display_name()),
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

    let (dialog_title, dialog_body, dialog_action) = match pending.read().as_ref() {
        Some(u) if u.is_blocked => (
            format!("Unblock {}?", u.display_name()),
            "They will be able to report issues again.".to_string(),
            "Unblock",
        ),
        Some(u) => (
            format!("Block {}?", u.display_name()),
            "Blocked citizens can still sign in but cannot report new issues.".to_string(),
            "Block",
        ),
        None => (String::new(), String::new(), ""),
    };

    rsx! {
        PageHeader {
            PageTitle { "Manage Users" }
        }

        match &*data.read() {
            Some(Ok(users)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Subscription" }
                        DataTableColumn { "Joined" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Action" }
                    }
                    DataTableBody {
                        if users.is_empty() {
                            DataTableEmpty { colspan: 6, message: "No citizens registered yet." }
                        }
                        for user in users.iter() {
                            DataTableRow { key: "{user.id}",
                                DataTableCell { "{user.display_name()}" }
                                DataTableCell { "{user.email}" }
                                DataTableCell {
                                    if user.subscription_status.is_premium() {
                                        Badge { variant: BadgeVariant::Success, "Premium" }
                                    } else {
                                        Badge { variant: BadgeVariant::Outline, "Free" }
                                    }
                                }
                                DataTableCell { "{format_date(user.created_at.as_ref())}" }
                                DataTableCell {
                                    if user.is_blocked {
                                        Badge { variant: BadgeVariant::Destructive, "Blocked" }
                                    } else {
                                        Badge { variant: BadgeVariant::Secondary, "Active" }
                                    }
                                }
                                DataTableCell {
                                    Button {
                                        variant: if user.is_blocked { ButtonVariant::Outline } else { ButtonVariant::Destructive },
                                        size: ButtonSize::Small,
                                        onclick: {
                                            let user = user.clone();
                                            move |_| pending.set(Some(user.clone()))
                                        },
                                        if user.is_blocked { "Unblock" } else { "Block" }
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
            open: pending.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    pending.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "{dialog_title}" }
                AlertDialogDescription { "{dialog_body}" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_confirm, "{dialog_action}" }
                }
            }
        }
    }
}
