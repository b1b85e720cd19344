//! Previous/next controls under the listing.

use dioxus::prelude::*;
use engine::PaginationController;

use crate::RouterNavigation;

/// Hidden entirely when there is a single page.
#[component]
pub fn PaginationBar(pages: PaginationController) -> Element {
    let nav = use_context::<RouterNavigation>();

    if !pages.is_visible() {
        return rsx! {};
    }

    let page = pages.page();
    let total_pages = pages.total_pages();
    let can_go_prev = pages.can_go_prev();
    let can_go_next = pages.can_go_next();
    let pages_for_prev = pages.clone();
    let pages_for_next = pages;

    rsx! {
        div { class: "pagination",
            button {
                class: "pagination-button",
                disabled: !can_go_prev,
                onclick: move |_| {
                    pages_for_prev.prev(&nav);
                },
                "Previous"
            }
            span { class: "page-info", "Page {page} of {total_pages}" }
            button {
                class: "pagination-button",
                disabled: !can_go_next,
                onclick: move |_| {
                    pages_for_next.next(&nav);
                },
                "Next"
            }
        }
    }
}
