//! Job list component for displaying one page of postings.

use dioxus::prelude::*;
use jobs_core::Job;

use super::JobCard;

/// Props for JobList component.
#[derive(Props, Clone, PartialEq)]
pub struct JobListProps {
    /// Jobs of the current page, in server order.
    pub jobs: Vec<Job>,
}

/// Grid of job cards.
#[component]
pub fn JobList(props: JobListProps) -> Element {
    rsx! {
        div { class: "job-list",
            if props.jobs.is_empty() {
                div { class: "empty-state",
                    p { "No jobs match these filters" }
                }
            } else {
                for job in props.jobs.iter() {
                    JobCard {
                        key: "{job.id}",
                        job: job.clone(),
                    }
                }
            }
        }
    }
}
