//! Job board components.

mod job_card;
mod job_detail;
mod job_form;
mod job_list;
mod pagination;
mod search_filters;
mod status_badge;

pub mod pages;

pub use job_card::JobCard;
pub use job_detail::JobDetail;
pub use job_form::JobForm;
pub use job_list::JobList;
pub use pagination::PaginationBar;
pub use search_filters::SearchFilters;
pub use status_badge::StatusBadge;
pub use pages::{CreateJobPage, EditJobPage, JobDetailPage, JobsPage};
