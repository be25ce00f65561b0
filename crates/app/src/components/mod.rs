pub mod issue_card;
pub mod issue_form;
pub mod status_badge;

pub use issue_card::IssueCard;
pub use issue_form::IssueForm;
pub use status_badge::{status_variant, PriorityBadge, RoleBadge, StatusBadge};
