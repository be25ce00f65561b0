use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, FeatureFlags, CURRENCY, SUBSCRIPTION_PRICE};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Avatar, AvatarFallback,
    AvatarImage, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DetailItem,
    DetailList, Input, PageHeader, PageTitle, StatCard, StatGrid, StatTone, ToastOptions,
};

use crate::auth::{expire_session_on, use_auth};
use crate::components::RoleBadge;
use crate::format_helpers::format_date;

/// Profile page: identity, subscription state and an edit form.
#[component]
pub fn Profile() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let toast = use_toast();

    let current = auth.current_user.read().clone();

    let mut name = use_signal(|| current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut photo_url = use_signal(|| {
        current
            .as_ref()
            .and_then(|u| u.photo_url.clone())
            .unwrap_or_default()
    });
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);
    let mut confirm_subscribe = use_signal(|| false);
    let mut subscribing = use_signal(|| false);

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        saving.set(true);
        field_errors.set(HashMap::new());

        let photo = Some(photo_url().trim().to_string()).filter(|p| !p.is_empty());
        match server::api::update_profile(name(), photo).await {
            Ok(updated) => {
                auth.set_user(updated);
                toast.success("Profile updated".to_string(), ToastOptions::new());
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
        saving.set(false);
    };

    let handle_subscribe = move |_: MouseEvent| {
        confirm_subscribe.set(false);
        spawn(async move {
            subscribing.set(true);
            match server::api::subscribe().await {
                Ok(()) => {
                    if let Ok(Some(user)) = server::api::get_current_user().await {
                        auth.set_user(user);
                    }
                    toast.success("You are now a Premium user.".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    expire_session_on(auth, &e);
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
            subscribing.set(false);
        });
    };

    let Some(user) = current else {
        return rsx! {};
    };

    let premium = user.subscription_status.is_premium();
    let show_subscribe = flags.payments && !premium;
    let status_label = if user.is_blocked {
        "Blocked"
    } else if premium {
        "Premium"
    } else {
        "Free"
    };
    let status_tone = if user.is_blocked {
        StatTone::Warning
    } else if premium {
        StatTone::Success
    } else {
        StatTone::Neutral
    };

    rsx! {
        PageHeader {
            PageTitle { "My Profile" }
        }

        div { class: "profile-layout",
            Card { class: "profile-card",
                CardContent {
                    div { class: "profile-identity",
                        Avatar { class: "large",
                            if let Some(url) = user.photo_url.clone() {
                                AvatarImage { src: url }
                            }
                            AvatarFallback { "{user.initial()}" }
                        }
                        h2 { "{user.display_name()}" }
                        p { class: "profile-email", "{user.email}" }
                        RoleBadge { role: user.role }
                    }

                    StatGrid {
                        StatCard { label: "Role", value: user.role.label().to_string(), tone: StatTone::Info }
                        StatCard { label: "Status", value: status_label.to_string(), tone: status_tone }
                    }

                    DetailList {
                        DetailItem { label: "Member since", value: format_date(user.created_at.as_ref()) }
                        DetailItem { label: "Subscription", value: user.subscription_status.as_str().to_string() }
                    }

                    if show_subscribe {
                        div { class: "profile-subscribe",
                            p { "Premium members get unlimited reports and priority handling." }
                            Button {
                                disabled: subscribing(),
                                onclick: move |_| confirm_subscribe.set(true),
                                if subscribing() {
                                    "Processing..."
                                } else {
                                    "Subscribe for Premium ({SUBSCRIPTION_PRICE}{CURRENCY})"
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "profile-card",
                CardHeader { CardTitle { "Edit Profile" } }
                CardContent {
                    form { class: "profile-form", onsubmit: handle_save,
                        Input {
                            label: "Name",
                            value: name(),
                            required: true,
                            error: field_errors.read().get("name").cloned(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Photo URL",
                            input_type: "url",
                            value: photo_url(),
                            error: field_errors.read().get("photo_url").cloned(),
                            on_input: move |e: FormEvent| photo_url.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            variant: ButtonVariant::Primary,
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        }

        AlertDialogRoot {
            open: confirm_subscribe(),
            on_open_change: move |open: bool| confirm_subscribe.set(open),
            AlertDialogContent {
                AlertDialogTitle { "Subscribe to Premium?" }
                AlertDialogDescription {
                    "A one-off payment of {SUBSCRIPTION_PRICE}{CURRENCY} upgrades your account."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_subscribe, "Pay {SUBSCRIPTION_PRICE}{CURRENCY}" }
                }
            }
        }
    }
}
