use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};

use crate::auth::use_auth;
use crate::routes::Route;

/// Citizen sign-up. New accounts are always citizens; staff are created by
/// an admin.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut photo_url = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let photo = Some(photo_url().trim().to_string()).filter(|p| !p.is_empty());

        match server::api::register(name(), email(), password(), photo).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().replace(Route::Home {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    let error = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create an account" }
                    CardDescription { "Join CityGuard to report problems in your neighbourhood" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_register,
                        Input {
                            label: "Name",
                            value: name(),
                            required: true,
                            error: error("name"),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            required: true,
                            error: error("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Photo URL",
                            input_type: "url",
                            placeholder: "https://...",
                            value: photo_url(),
                            error: error("photo_url"),
                            on_input: move |e: FormEvent| photo_url.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "At least 6 characters",
                            value: password(),
                            required: true,
                            error: error("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Register" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::Login { redirect: None }, "Login" }
                    }
                    Link { to: Route::Home {}, class: "auth-home-link", "Back to Home" }
                }
            }
        }
    }
}
