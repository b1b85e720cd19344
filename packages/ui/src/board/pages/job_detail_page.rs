//! Detail page for one job posting.

use api::HttpJobsApi;
use dioxus::prelude::*;
use jobs_core::JobId;

use crate::board::JobDetail;

#[component]
pub fn JobDetailPage(id: i64) -> Element {
    let api = use_context::<HttpJobsApi>();
    let navigator = use_navigator();
    let mut delete_error = use_signal(|| None::<String>);

    let api_for_load = api.clone();
    let job = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api_for_load.clone();
        async move { api.get_job(JobId(id)).await }
    }));

    let delete = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            match api.delete_job(JobId(id)).await {
                Ok(()) => {
                    navigator.push("/");
                }
                Err(err) => {
                    tracing::warn!(%err, job_id = id, "deleting job failed");
                    delete_error.set(Some("Failed to delete job".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "page-container",
            button {
                class: "btn btn-secondary",
                onclick: move |_| navigator.go_back(),
                "Back"
            }
            if let Some(message) = delete_error() {
                div { class: "error-banner", "{message}" }
            }
            match &*job.read() {
                None => rsx! {
                    div { class: "loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error-banner", "{err.user_message()}" }
                },
                Some(Ok(job)) => rsx! {
                    JobDetail { job: job.clone() }
                    div { class: "job-actions",
                        Link { to: "/edit/{id}", class: "btn btn-primary", "Edit" }
                        button { class: "btn btn-danger", onclick: delete, "Delete" }
                    }
                },
            }
        }
    }
}
