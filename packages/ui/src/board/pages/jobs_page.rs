//! Listing page - filters, one page of jobs, pagination.

use api::HttpJobsApi;
use dioxus::prelude::*;
use engine::{
    FetchTicket, ListingController, ListingHandle, ListingStatus, fetch_page, follow_navigation,
};

use crate::board::{JobList, PaginationBar, SearchFilters};
use crate::{ListingQuery, RouterNavigation};

/// The page's listing signal, as `follow_navigation` sees it.
#[derive(Clone, Copy)]
struct ListingSignal(Signal<ListingController>);

impl ListingHandle for ListingSignal {
    fn with_listing<R>(&mut self, f: impl FnOnce(&mut ListingController) -> R) -> R {
        f(&mut self.0.write())
    }
}

/// Listing page component. `query` is the route's query string; every change of it,
/// back and forward included, reaches the listing through the navigation port.
#[component]
pub fn JobsPage(query: ListingQuery) -> Element {
    let api = use_context::<HttpJobsApi>();
    let navigator = use_navigator();
    let nav = use_context_provider(|| RouterNavigation::new(navigator, &query.0));
    let mut listing = use_signal(ListingController::new);
    let committed = jobs_core::decode(&query.0);

    use_effect(use_reactive((&query,), move |(query,)| nav.publish(&query.0)));

    let api_for_driver = api.clone();
    use_future(move || {
        let api = api_for_driver.clone();
        async move { follow_navigation(ListingSignal(listing), &nav, &api).await }
    });

    let status = listing.read().status().clone();
    let pages = listing.read().pagination();

    rsx! {
        div { class: "page-container",
            SearchFilters { committed }

            match status {
                ListingStatus::Idle | ListingStatus::Loading => rsx! {
                    div { class: "loading", "Loading..." }
                },
                ListingStatus::Failed(err) => rsx! {
                    div { class: "error-banner",
                        span { "{err.user_message()}" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                let ticket = listing.write().reload();
                                if let Some(ticket) = ticket {
                                    retry(listing, api.clone(), ticket);
                                }
                            },
                            "Retry"
                        }
                    }
                },
                ListingStatus::Success(page) => rsx! {
                    JobList { jobs: page.items }
                    if let Some(pages) = pages {
                        PaginationBar { pages }
                    }
                },
            }
        }
    }
}

/// Run a reload in the background. The controller drops the result if the
/// location has moved on meanwhile.
fn retry(mut listing: Signal<ListingController>, api: HttpJobsApi, ticket: FetchTicket) {
    spawn(async move {
        let result = fetch_page(&api, &ticket).await;
        listing.write().resolve(ticket, result);
    });
}
