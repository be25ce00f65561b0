use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{Category, CreateIssueRequest};
use shared_ui::{Button, ButtonVariant, FormSelect, Input, Textarea};

/// Report form shared by the add and edit pages.
///
/// Field errors come back from the server as `AppError::field_errors` and are
/// shown under the matching input.
#[component]
pub fn IssueForm(
    #[props(default)] initial: Option<CreateIssueRequest>,
    submit_label: String,
    #[props(default = false)] busy: bool,
    #[props(default)] field_errors: HashMap<String, String>,
    on_submit: EventHandler<CreateIssueRequest>,
) -> Element {
    let mut title = use_signal(|| initial.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let mut category = use_signal(|| initial.as_ref().map(|r| r.category).unwrap_or(Category::Roads));
    let mut location =
        use_signal(|| initial.as_ref().map(|r| r.location.clone()).unwrap_or_default());
    let mut image = use_signal(|| initial.as_ref().map(|r| r.image.clone()).unwrap_or_default());
    let mut description =
        use_signal(|| initial.as_ref().map(|r| r.description.clone()).unwrap_or_default());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(CreateIssueRequest {
            title: title(),
            category: category(),
            location: location(),
            image: image(),
            description: description(),
        });
    };

    let error = |field: &str| field_errors.get(field).cloned();

    rsx! {
        form { class: "issue-form", onsubmit: handle_submit,
            Input {
                label: "Title",
                placeholder: "Broken streetlight on Road 7",
                value: title(),
                required: true,
                error: error("title"),
                on_input: move |e: FormEvent| title.set(e.value()),
            }
            FormSelect {
                label: "Category",
                value: category().as_str().to_string(),
                onchange: move |e: FormEvent| category.set(Category::from_str_or_default(&e.value())),
                for c in Category::ALL {
                    option { value: c.as_str(), selected: c == category(), "{c.as_str()}" }
                }
            }
            Input {
                label: "Location",
                placeholder: "Area, street or landmark",
                value: location(),
                required: true,
                error: error("location"),
                on_input: move |e: FormEvent| location.set(e.value()),
            }
            Input {
                label: "Image URL",
                input_type: "url",
                placeholder: "https://",
                value: image(),
                required: true,
                error: error("image"),
                on_input: move |e: FormEvent| image.set(e.value()),
            }
            if !image().trim().is_empty() {
                img { class: "issue-form-preview", src: "{image}", alt: "Preview" }
            }
            Textarea {
                label: "Description",
                placeholder: "What is wrong and since when?",
                value: description(),
                required: true,
                error: error("description"),
                on_input: move |e: FormEvent| description.set(e.value()),
            }
            div { class: "issue-form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
            }
        }
    }
}
