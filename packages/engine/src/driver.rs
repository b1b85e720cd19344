//! Keeps a listing in step with a navigation port.

use std::future::Future;
use std::pin::Pin;

use api::JobListing;
use jobs_core::{ApiError, PageResult};

use crate::{FetchTicket, ListingController, Navigation, fetch_page};

/// Access to a `ListingController` owned elsewhere, such as a UI signal.
///
/// The driver only borrows the controller for the duration of `f`, never across
/// an await.
pub trait ListingHandle {
    fn with_listing<R>(&mut self, f: impl FnOnce(&mut ListingController) -> R) -> R;
}

type Fetched = (FetchTicket, Result<PageResult, ApiError>);
type InFlight<'a> = Pin<Box<dyn Future<Output = Fetched> + 'a>>;

/// Feed every location `nav` reports to the listing, starting with the current one,
/// and resolve the fetches it asks for.
///
/// A location change while a fetch is in flight drops that fetch; the controller's
/// generation check rejects anything older that still resolves. Returns when the
/// navigation channel closes.
pub async fn follow_navigation<'a, H, N, L>(mut listing: H, nav: &N, api: &'a L)
where
    H: ListingHandle,
    N: Navigation,
    L: JobListing,
{
    let mut locations = nav.subscribe();
    let mut in_flight: Option<InFlight<'a>> = None;

    let initial = locations.borrow_and_update().clone();
    if let Some(ticket) = listing.with_listing(|l| l.observe(&initial)) {
        in_flight = Some(start(api, ticket));
    }

    loop {
        // A new location makes whatever is in flight stale, so it goes first.
        tokio::select! {
            biased;
            changed = locations.changed() => {
                if changed.is_err() {
                    tracing::debug!("navigation closed, listing no longer followed");
                    return;
                }
                let location = locations.borrow_and_update().clone();
                if let Some(ticket) = listing.with_listing(|l| l.observe(&location)) {
                    in_flight = Some(start(api, ticket));
                }
            }
            (ticket, result) = next_response(&mut in_flight) => {
                in_flight = None;
                listing.with_listing(|l| l.resolve(ticket, result));
            }
        }
    }
}

fn start<'a, L: JobListing>(api: &'a L, ticket: FetchTicket) -> InFlight<'a> {
    Box::pin(async move {
        let result = fetch_page(api, &ticket).await;
        (ticket, result)
    })
}

/// Never resolves while nothing is in flight.
async fn next_response(in_flight: &mut Option<InFlight<'_>>) -> Fetched {
    match in_flight {
        Some(fetch) => fetch.await,
        None => std::future::pending().await,
    }
}
