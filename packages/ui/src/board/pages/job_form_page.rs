//! Create and edit pages wrapping the job form.

use api::HttpJobsApi;
use dioxus::prelude::*;
use jobs_core::JobId;

use crate::board::JobForm;

#[component]
pub fn CreateJobPage() -> Element {
    rsx! {
        div { class: "page-container",
            JobForm {}
        }
    }
}

/// Loads the job first so the form opens pre-filled.
#[component]
pub fn EditJobPage(id: i64) -> Element {
    let api = use_context::<HttpJobsApi>();
    let job = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        async move { api.get_job(JobId(id)).await }
    }));

    rsx! {
        div { class: "page-container",
            match &*job.read() {
                None => rsx! {
                    div { class: "loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error-banner", "{err.user_message()}" }
                },
                Some(Ok(job)) => rsx! {
                    JobForm { key: "{job.id}", job: job.clone() }
                },
            }
        }
    }
}
