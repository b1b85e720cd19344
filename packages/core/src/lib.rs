//! Core domain types for the job board client.
//!
//! This crate contains the types shared by every other package:
//! - `Job` and `JobDraft` for job postings
//! - `QueryState` and its URL codec for the listing criteria
//! - `PageResult` for one fetched page
//! - Error types

pub mod codec;
mod error;
mod job;
mod page;
mod query;

pub use codec::{decode, encode};
pub use error::{ApiError, DecodeDefaulted, DraftError, GENERIC_FETCH_ERROR, QueryError};
pub use job::{Job, JobDraft, JobId, JobStatus, JobSummary, parse_form_date, parse_skills};
pub use page::PageResult;
pub use query::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, FilterDraft, FilterField, OrderBy, QueryState, StatusFilter,
};
