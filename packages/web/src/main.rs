// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use api::{ApiConfig, HttpJobsApi};
use dioxus::prelude::*;

use ui::board::{CreateJobPage, EditJobPage, JobDetailPage, JobsPage};
use ui::{ListingQuery, Navbar};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
        // The listing state lives entirely in the query string.
        #[route("/?:..query")]
        Jobs { query: ListingQuery },
        #[route("/jobs/:id")]
        JobDetail { id: i64 },
        #[route("/create")]
        CreateJob {},
        #[route("/edit/:id")]
        EditJob { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "desktop")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ApiConfig::from_env().map_err(|e| e.to_string()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match config {
            Ok(config) => rsx! {
                Board { config }
            },
            Err(message) => rsx! {
                div { class: "error-banner", "Invalid configuration: {message}" }
            },
        }
    }
}

/// Provides the API client to every page, then hands over to the router.
#[component]
fn Board(config: ApiConfig) -> Element {
    use_context_provider(|| {
        tracing::info!(base_url = %config.base_url, "jobs API configured");
        HttpJobsApi::new(config.clone())
    });

    rsx! {
        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link {
                to: Route::Jobs { query: ListingQuery::default() },
                "Jobs"
            }
            Link {
                to: Route::CreateJob {},
                "Post a Job"
            }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn Jobs(query: ListingQuery) -> Element {
    rsx! {
        JobsPage { query }
    }
}

#[component]
fn JobDetail(id: i64) -> Element {
    rsx! {
        JobDetailPage { id }
    }
}

#[component]
fn CreateJob() -> Element {
    rsx! {
        CreateJobPage {}
    }
}

#[component]
fn EditJob(id: i64) -> Element {
    rsx! {
        EditJobPage { id }
    }
}
