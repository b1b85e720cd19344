//! Bridge between the Dioxus router and the synchronization engine.

use dioxus::prelude::*;
use dioxus::router::Navigator;
use engine::Navigation;
use tokio::sync::watch;

/// Raw query string of the listing route.
///
/// Kept verbatim so the address bar shows exactly what was pushed; decoding into a
/// `QueryState` happens in one place, `jobs_core::decode`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery(pub String);

impl From<&str> for ListingQuery {
    fn from(query: &str) -> Self {
        Self(query.strip_prefix('?').unwrap_or(query).to_string())
    }
}

impl std::fmt::Display for ListingQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigation port backed by the router's history.
///
/// The listing page creates one and shares it through context. The router hands
/// the page its query string; the page passes it on with `publish`, which is what
/// `subscribe` reports. Dropping the page closes the channel.
#[derive(Clone, Copy)]
pub struct RouterNavigation {
    navigator: Navigator,
    location: Signal<watch::Sender<String>>,
}

impl RouterNavigation {
    pub fn new(navigator: Navigator, query: &str) -> Self {
        let (location, _) = watch::channel(query.to_string());
        Self {
            navigator,
            location: Signal::new(location),
        }
    }

    /// Report the route's current query string. Unchanged values wake nobody.
    pub fn publish(&self, query: &str) {
        self.location.peek().send_if_modified(|current| {
            if current == query {
                return false;
            }
            *current = query.to_string();
            true
        });
    }
}

impl Navigation for RouterNavigation {
    fn push(&self, query: &str) {
        let target = if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{query}")
        };
        tracing::info!(%target, "navigating");
        self.navigator.push(target);
    }

    fn subscribe(&self) -> watch::Receiver<String> {
        self.location.peek().subscribe()
    }
}
