use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMapPin, LdThumbsUp};
use dioxus_free_icons::Icon;
use shared_types::{Issue, Priority};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardAction, CardContent,
    CardFooter, CardHeader, CardMedia, CardTitle,
};

use super::StatusBadge;
use crate::format_helpers::truncate;
use crate::routes::Route;

/// Grid card for an issue, used on the home page and the public browser.
///
/// When `on_upvote` is set an upvote button with the current count is shown;
/// otherwise the count is shown read-only.
#[component]
pub fn IssueCard(
    issue: Issue,
    #[props(default)] on_upvote: Option<EventHandler<String>>,
    #[props(default = false)] upvoted: bool,
) -> Element {
    let id = issue.id.clone();
    let summary = truncate(&issue.description, 120);

    rsx! {
        Card { class: "issue-card",
            div { class: "issue-card-media",
                CardMedia { src: issue.image.clone(), alt: issue.title.clone() }
                if issue.priority == Priority::High {
                    Badge { class: "issue-card-priority", variant: BadgeVariant::Destructive, "Top Priority" }
                }
            }
            CardHeader {
                CardTitle { "{issue.title}" }
                CardAction {
                    StatusBadge { status: issue.status }
                }
            }
            CardContent {
                p { class: "issue-card-location",
                    Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                    "{issue.location}"
                }
                p { class: "issue-card-summary", "{summary}" }
            }
            CardFooter {
                match on_upvote {
                    Some(handler) => {
                        let vote_id = id.clone();
                        rsx! {
                            Button {
                                variant: if upvoted { ButtonVariant::Secondary } else { ButtonVariant::Ghost },
                                size: ButtonSize::Small,
                                onclick: move |_| handler.call(vote_id.clone()),
                                Icon::<LdThumbsUp> { icon: LdThumbsUp, width: 16, height: 16 }
                                "{issue.upvote_count}"
                            }
                        }
                    }
                    None => rsx! {
                        span { class: "issue-card-votes",
                            Icon::<LdThumbsUp> { icon: LdThumbsUp, width: 16, height: 16 }
                            "{issue.upvote_count}"
                        }
                    },
                }
                Link { to: Route::IssueDetail { id: id.clone() },
                    Button { variant: ButtonVariant::Primary, size: ButtonSize::Small, "View Details" }
                }
            }
        }
    }
}
