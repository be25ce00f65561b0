use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};

use crate::auth::use_auth;
use crate::routes::Route;

/// Login page. `redirect` is the path a guard bounced the visitor from;
/// after a successful login they go back there, otherwise home.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        let target = redirect_target
            .read()
            .as_deref()
            .and_then(|path| path.parse::<Route>().ok())
            .unwrap_or(Route::Home {});
        navigator().replace(target);
    };

    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                go_to_destination();
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

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Welcome back" }
                    CardDescription { "Sign in to report and track issues in your city" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            required: true,
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            required: true,
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Login" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-switch",
                        "New to CityGuard? "
                        Link { to: Route::Register {}, "Create an account" }
                    }
                    Link { to: Route::Home {}, class: "auth-home-link", "Back to Home" }
                }
            }
        }
    }
}
