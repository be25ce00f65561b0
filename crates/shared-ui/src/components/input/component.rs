use dioxus::prelude::*;

/// Labelled single-line input.
///
/// `error` renders a message under the field and flags it `aria-invalid`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "cg-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cg-input-wrapper",
            if !label.is_empty() {
                label { class: "cg-input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                span { class: "cg-input-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_marks_field_invalid() {
        let html = dioxus_ssr::render_element(rsx! {
            Input {
                label: "Email",
                input_type: "email",
                error: Some("Valid email is required".to_string()),
            }
        });
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains("Valid email is required"));
    }

    #[test]
    fn no_error_renders_no_message() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { label: "Name" }
        });
        assert!(html.contains(r#"aria-invalid="false""#));
        assert!(!html.contains("cg-input-error"));
    }
}
