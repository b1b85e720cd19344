//! Client for the remote jobs API.
//!
//! This crate wraps the HTTP endpoints the job board talks to:
//! - Listing with filter, sort and pagination parameters
//! - Job records (get, create, update, delete)

mod config;
mod jobs;

pub use config::{ApiConfig, ConfigError, DEFAULT_BASE_URL};
pub use jobs::{HttpJobsApi, JobListing};

// Re-export core types for convenience
pub use jobs_core::{ApiError, Job, JobDraft, JobId, PageResult, QueryState};
