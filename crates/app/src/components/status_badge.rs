use dioxus::prelude::*;
use shared_types::{IssueStatus, Priority, Role};
use shared_ui::{Badge, BadgeVariant};

/// Badge colour for each lifecycle state.
pub fn status_variant(status: IssueStatus) -> BadgeVariant {
    match status {
        IssueStatus::Pending => BadgeVariant::Warning,
        IssueStatus::InProgress => BadgeVariant::Primary,
        IssueStatus::Resolved => BadgeVariant::Success,
        IssueStatus::Closed => BadgeVariant::Secondary,
        IssueStatus::Rejected => BadgeVariant::Destructive,
    }
}

#[component]
pub fn StatusBadge(status: IssueStatus) -> Element {
    rsx! {
        Badge { variant: status_variant(status), "{status.label()}" }
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> Element {
    let variant = match priority {
        Priority::High => BadgeVariant::Destructive,
        Priority::Normal => BadgeVariant::Outline,
    };
    rsx! {
        Badge { variant, "{priority.label()}" }
    }
}

#[component]
pub fn RoleBadge(role: Role) -> Element {
    let variant = match role {
        Role::Admin => BadgeVariant::Destructive,
        Role::Staff => BadgeVariant::Primary,
        Role::Citizen => BadgeVariant::Secondary,
    };
    rsx! {
        Badge { variant, "{role.label()}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_distinct_colour() {
        let variants: Vec<_> = IssueStatus::ALL.iter().map(|s| status_variant(*s)).collect();
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn resolved_is_success_and_rejected_is_destructive() {
        assert_eq!(status_variant(IssueStatus::Resolved), BadgeVariant::Success);
        assert_eq!(status_variant(IssueStatus::Rejected), BadgeVariant::Destructive);
    }
}
