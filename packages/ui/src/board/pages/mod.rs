//! Page components for route-based navigation.

mod job_detail_page;
mod job_form_page;
mod jobs_page;

pub use job_detail_page::JobDetailPage;
pub use job_form_page::{CreateJobPage, EditJobPage};
pub use jobs_page::JobsPage;
