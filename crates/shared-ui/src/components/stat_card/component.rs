use dioxus::prelude::*;

/// Accent colour of a stat tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
}

impl StatTone {
    fn as_str(&self) -> &'static str {
        match self {
            StatTone::Neutral => "neutral",
            StatTone::Info => "info",
            StatTone::Success => "success",
            StatTone::Warning => "warning",
        }
    }
}

/// Dashboard tile showing one number with a label and an optional icon.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] tone: StatTone,
    #[props(default)] hint: Option<String>,
    /// Icon rendered to the left of the number.
    icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cg-stat-card", "data-tone": tone.as_str(),
            if let Some(icon) = icon {
                div { class: "cg-stat-card-icon", {icon} }
            }
            div { class: "cg-stat-card-body",
                span { class: "cg-stat-card-label", "{label}" }
                span { class: "cg-stat-card-value", "{value}" }
                if let Some(hint) = hint {
                    span { class: "cg-stat-card-hint", "{hint}" }
                }
            }
        }
    }
}

/// Responsive row of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cg-stat-grid", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_value_and_tone() {
        let html = dioxus_ssr::render_element(rsx! {
            StatGrid {
                StatCard {
                    label: "Resolved",
                    value: "12",
                    tone: StatTone::Success,
                    hint: Some("of 40 reported".to_string()),
                }
            }
        });
        assert!(html.contains(r#"data-tone="success""#));
        assert!(html.contains("Resolved"));
        assert!(html.contains("12"));
        assert!(html.contains("of 40 reported"));
        assert!(!html.contains("cg-stat-card-icon"));
    }
}
