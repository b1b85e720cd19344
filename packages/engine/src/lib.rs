//! Query-state synchronization for the job board.
//!
//! Keeps the filter form, the address bar and the displayed listing consistent.
//!
//! # Architecture
//!
//! - `FilterController` - draft filters, committed into navigation on submit
//! - `ListingController` - follows navigation and owns the fetched page
//! - `PaginationController` - page-only transitions of a loaded page
//! - `Navigation` - the history port; `MemoryHistory` implements it in-process
//! - `follow_navigation` - drives a `ListingController` from a `Navigation`
//!
//! # Flow
//!
//! ```ignore
//! let history = MemoryHistory::new("");
//!
//! // Runs until the history goes away.
//! spawn(follow_navigation(listing, &history, &api));
//!
//! filters.commit(&committed, &history);
//! ```
//!
//! Hosts that drive the listing themselves call `observe`, `fetch_page` and
//! `resolve` directly.

mod driver;
mod filter;
mod listing;
mod navigation;
mod pagination;

pub use driver::{ListingHandle, follow_navigation};
pub use filter::FilterController;
pub use listing::{FetchTicket, ListingController, ListingStatus, fetch_page};
pub use navigation::{MemoryHistory, Navigation};
pub use pagination::PaginationController;
