//! Job card component for one entry of the listing.

use dioxus::prelude::*;
use jobs_core::Job;

use super::StatusBadge;

/// Props for JobCard component.
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    /// The job to display.
    pub job: Job,
}

/// Card linking to the job's detail page.
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = props.job;
    let posted = job.posting_date.format("%Y-%m-%d").to_string();
    let expires = job.expiration_date.format("%Y-%m-%d").to_string();

    rsx! {
        Link {
            to: "/jobs/{job.id}",
            class: "job-card",
            div { class: "job-card-header",
                h2 { "{job.title}" }
                StatusBadge { status: job.status }
            }
            h3 { "{job.company}" }
            p { class: "job-location", "{job.location}" }
            if let Some(salary) = job.salary_range.as_deref().filter(|s| !s.is_empty()) {
                p { class: "job-salary", "{salary}" }
            }
            div { class: "skills",
                for skill in job.required_skills.iter() {
                    span { class: "skill-tag", "{skill}" }
                }
            }
            p { class: "job-dates", "Posting Date: {posted}" }
            p { class: "job-dates", "Expiration Date: {expires}" }
        }
    }
}
