use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// Most page numbers shown at once.
const WINDOW: u32 = 5;

/// Page numbers to render as buttons, centred on `current` where possible.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let span = WINDOW.min(total_pages);
    let mut start = current.saturating_sub(span / 2).max(1);
    if start + span - 1 > total_pages {
        start = total_pages + 1 - span;
    }
    (start..start + span).collect()
}

/// Page-based pagination with previous/next and numbered buttons.
///
/// `page` is 1-based. Nothing renders when there is a single page.
#[component]
pub fn Pagination(page: Signal<u32>, total_pages: u32) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    let mut page = page;
    let current = (*page.read()).clamp(1, total_pages);
    let numbers = page_window(current, total_pages);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "cg-pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: current <= 1,
                onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                "Prev"
            }
            for n in numbers {
                Button {
                    key: "{n}",
                    variant: if n == current { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    size: ButtonSize::Small,
                    onclick: move |_| page.set(n),
                    "{n}"
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: current >= total_pages,
                onclick: move |_| page.set((current + 1).min(total_pages)),
                "Next"
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn window_covers_all_pages_when_few() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(3, 3), vec![1, 2, 3]);
    }

    #[test]
    fn window_centres_on_current_page() {
        assert_eq!(page_window(6, 12), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_sticks_to_edges() {
        assert_eq!(page_window(1, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(12, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(11, 12), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_clamps_out_of_range_page() {
        assert_eq!(page_window(40, 4), vec![1, 2, 3, 4]);
        assert_eq!(page_window(0, 2), vec![1, 2]);
        assert!(page_window(1, 0).is_empty());
    }
}
