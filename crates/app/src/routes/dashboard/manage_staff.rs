use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, AuthUser};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonSize, ButtonVariant,
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageHeader, PageTitle,
    Skeleton, ToastOptions,
};

use crate::auth::{expire_session_on, use_auth, use_session_expiry};
use crate::format_helpers::format_date;

/// Staff accounts: create, list and delete.
#[component]
pub fn ManageStaff() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut data = use_resource(move || async move { server::api::list_staff().await });
    use_session_expiry(data);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut creating = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<AuthUser>::None);

    let handle_create = move |evt: FormEvent| async move {
        evt.prevent_default();
        creating.set(true);
        field_errors.set(HashMap::new());

        match server::api::create_staff(name(), email(), password()).await {
            Ok(staff) => {
                name.set(String::new());
                email.set(String::new());
                password.set(String::new());
                data.restart();
                toast.success(
                    format!("Staff account created for {}", staff.display_name()),
                    ToastOptions::new(),
                );
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
        creating.set(false);
    };

    let handle_delete = move |_: MouseEvent| {
        let Some(staff) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match server::api::delete_staff(staff.id.clone()).await {
                Ok(()) => {
                    data.restart();
                    toast.success(
                        format!("{} removed", staff.display_name()),
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

    let delete_name = pending_delete
        .read()
        .as_ref()
        .map(|s| s.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        PageHeader {
            PageTitle { "Manage Staff" }
        }

        Card { class: "staff-create",
            CardHeader { CardTitle { "Add Staff Member" } }
            CardContent {
                form { class: "staff-create-form", onsubmit: handle_create,
                    Input {
                        label: "Name",
                        value: name(),
                        required: true,
                        error: field_errors.read().get("name").cloned(),
                        on_input: move |e: FormEvent| name.set(e.value()),
                    }
                    Input {
                        label: "Email",
                        input_type: "email",
                        value: email(),
                        required: true,
                        error: field_errors.read().get("email").cloned(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                    Input {
                        label: "Password",
                        input_type: "password",
                        placeholder: "At least 6 characters",
                        value: password(),
                        required: true,
                        error: field_errors.read().get("password").cloned(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    Button {
                        button_type: "submit",
                        disabled: creating(),
                        if creating() { "Creating..." } else { "Create Staff" }
                    }
                }
            }
        }

        match &*data.read() {
            Some(Ok(staff)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Added" }
                        DataTableColumn { "Action" }
                    }
                    DataTableBody {
                        if staff.is_empty() {
                            DataTableEmpty { colspan: 4, message: "No staff members yet." }
                        }
                        for member in staff.iter() {
                            DataTableRow { key: "{member.id}",
                                DataTableCell { "{member.display_name()}" }
                                DataTableCell { "{member.email}" }
                                DataTableCell { "{format_date(member.created_at.as_ref())}" }
                                DataTableCell {
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        size: ButtonSize::Small,
                                        onclick: {
                                            let member = member.clone();
                                            move |_| pending_delete.set(Some(member.clone()))
                                        },
                                        "Delete"
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
                AlertDialogTitle { "Delete {delete_name}?" }
                AlertDialogDescription {
                    "The staff account is removed. Issues assigned to them stay assigned until an admin reassigns them."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_delete, "Delete" }
                }
            }
        }
    }
}
