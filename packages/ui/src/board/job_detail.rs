//! Full view of one job posting.

use dioxus::prelude::*;
use jobs_core::Job;

use super::StatusBadge;

#[component]
pub fn JobDetail(job: Job) -> Element {
    let posted = job.posting_date.format("%Y-%m-%d").to_string();
    let expires = job.expiration_date.format("%Y-%m-%d").to_string();

    rsx! {
        article { class: "job-detail",
            div { class: "job-detail-header",
                h1 { "{job.title}" }
                StatusBadge { status: job.status }
            }
            h2 { "{job.company}" }
            p { class: "job-location", "{job.location}" }
            if let Some(salary) = job.salary_range.as_deref().filter(|s| !s.is_empty()) {
                p { class: "job-salary", "Salary: {salary}" }
            }
            section { class: "job-description",
                h3 { "Description" }
                p { "{job.description}" }
            }
            if !job.required_skills.is_empty() {
                section {
                    h3 { "Required Skills" }
                    div { class: "skills",
                        for skill in job.required_skills.iter() {
                            span { class: "skill-tag", "{skill}" }
                        }
                    }
                }
            }
            p { class: "job-dates", "Posting Date: {posted}" }
            p { class: "job-dates", "Expiration Date: {expires}" }
        }
    }
}
