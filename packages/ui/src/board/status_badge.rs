//! Status badge component.

use dioxus::prelude::*;
use jobs_core::JobStatus;

/// Badge for displaying a posting's status.
#[component]
pub fn StatusBadge(status: JobStatus) -> Element {
    let (bg_class, text) = match status {
        JobStatus::Scheduled => ("badge-scheduled", "Scheduled"),
        JobStatus::Active => ("badge-active", "Active"),
        JobStatus::Expired => ("badge-expired", "Expired"),
    };

    rsx! {
        span {
            class: "status-badge {bg_class}",
            {text}
        }
    }
}
