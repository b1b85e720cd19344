//! Listing state machine: `Idle -> Loading -> {Success, Failed}`.
//!
//! Each fetch is issued as a [`FetchTicket`] tagged with a generation number. Only
//! the ticket of the latest generation may change the view; responses for
//! superseded states are dropped when they resolve.

use std::num::NonZeroU32;

use api::JobListing;
use jobs_core::{ApiError, JobSummary, PageResult, QueryState, codec};

use crate::PaginationController;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListingStatus {
    #[default]
    Idle,
    Loading,
    Success(PageResult),
    Failed(ApiError),
}

/// One issued fetch. Hand it back to [`ListingController::resolve`] with the result.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    generation: u64,
    query: QueryState,
}

impl FetchTicket {
    pub fn query(&self) -> &QueryState {
        &self.query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingController {
    query: Option<QueryState>,
    generation: u64,
    status: ListingStatus,
}

impl ListingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an observed location. Returns the fetch to issue, or `None` when the
    /// decoded state is equivalent to the current one.
    pub fn observe(&mut self, location: &str) -> Option<FetchTicket> {
        self.observe_state(codec::decode(location))
    }

    pub fn observe_state(&mut self, query: QueryState) -> Option<FetchTicket> {
        if self.query.as_ref() == Some(&query) {
            tracing::debug!(query = %query, "navigation to equivalent state, no fetch");
            return None;
        }
        self.query = Some(query);
        self.begin()
    }

    /// Fetch the current state again. Only from a settled state; a load already in
    /// flight is left alone.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        match self.status {
            ListingStatus::Success(_) | ListingStatus::Failed(_) => self.begin(),
            ListingStatus::Idle | ListingStatus::Loading => None,
        }
    }

    fn begin(&mut self) -> Option<FetchTicket> {
        let query = self.query.clone()?;
        self.generation += 1;
        self.status = ListingStatus::Loading;
        tracing::info!(generation = self.generation, query = %query, "loading listing");
        Some(FetchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Store the outcome of `ticket`. Returns false, leaving the view untouched,
    /// when the ticket belongs to a superseded state.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<PageResult, ApiError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "dropping stale listing response"
            );
            return false;
        }

        self.status = match result {
            Ok(page) => {
                tracing::info!(items = page.items.len(), total = page.total, "listing loaded");
                ListingStatus::Success(page)
            }
            Err(err) => {
                tracing::warn!(error = %err, "listing failed to load");
                ListingStatus::Failed(err)
            }
        };
        true
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    /// The committed state the view currently reflects or is loading.
    pub fn query(&self) -> Option<&QueryState> {
        self.query.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, ListingStatus::Loading)
    }

    /// Items of the loaded page; empty in every other state.
    pub fn items(&self) -> &[JobSummary] {
        match &self.status {
            ListingStatus::Success(page) => &page.items,
            _ => &[],
        }
    }

    pub fn total_pages(&self) -> Option<NonZeroU32> {
        match &self.status {
            ListingStatus::Success(page) => Some(page.total_pages),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            ListingStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Page transitions for the loaded page.
    pub fn pagination(&self) -> Option<PaginationController> {
        match (&self.status, &self.query) {
            (ListingStatus::Success(page), Some(query)) => {
                Some(PaginationController::new(query, page))
            }
            _ => None,
        }
    }
}

/// Run the fetch `ticket` describes.
pub async fn fetch_page<L: JobListing>(api: &L, ticket: &FetchTicket) -> Result<PageResult, ApiError> {
    api.list_jobs(ticket.query()).await
}
