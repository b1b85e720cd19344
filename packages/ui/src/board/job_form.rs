//! Create and edit form for a job posting.

use api::HttpJobsApi;
use dioxus::prelude::*;
use jobs_core::{DraftError, Job, JobDraft, parse_form_date, parse_skills};

/// Raw form input, kept as typed until submit.
#[derive(Debug, Clone, Default, PartialEq)]
struct FormFields {
    title: String,
    company: String,
    location: String,
    description: String,
    salary_range: String,
    skills: String,
    posting_date: String,
    expiration_date: String,
}

impl FormFields {
    fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            salary_range: job.salary_range.clone().unwrap_or_default(),
            skills: job.required_skills.join(", "),
            posting_date: job.posting_date.format("%Y-%m-%d").to_string(),
            expiration_date: job.expiration_date.format("%Y-%m-%d").to_string(),
        }
    }

    fn to_draft(&self) -> Result<JobDraft, DraftError> {
        let salary = self.salary_range.trim();
        let draft = JobDraft {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            salary_range: (!salary.is_empty()).then(|| salary.to_string()),
            required_skills: parse_skills(&self.skills),
            posting_date: parse_form_date(&self.posting_date)?,
            expiration_date: parse_form_date(&self.expiration_date)?,
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Job form. With `job` set it edits that posting, otherwise it creates one.
/// On success the app moves to the saved job's detail page.
#[component]
pub fn JobForm(job: Option<Job>) -> Element {
    let api = use_context::<HttpJobsApi>();
    let navigator = use_navigator();
    let editing = job.as_ref().map(|job| job.id);
    let mut fields = use_signal(|| job.as_ref().map(FormFields::from_job).unwrap_or_default());
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        let draft = match fields.read().to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let api = api.clone();
        saving.set(true);
        error.set(None);
        spawn(async move {
            let saved = match editing {
                Some(id) => api.update_job(id, &draft).await,
                None => api.create_job(&draft).await,
            };
            saving.set(false);
            match saved {
                Ok(job) => {
                    navigator.push(format!("/jobs/{}", job.id));
                }
                Err(err) => {
                    tracing::warn!(%err, "saving job failed");
                    error.set(Some("Failed to save job".to_string()));
                }
            }
        });
    };

    let values = fields.read().clone();
    let heading = if editing.is_some() { "Edit Job" } else { "Create Job" };
    let button_label = if saving() { "Saving..." } else { "Save" };

    rsx! {
        div { class: "job-form",
            h1 { "{heading}" }
            if let Some(message) = error() {
                div { class: "error-banner", "{message}" }
            }
            label { "Title"
                input {
                    r#type: "text",
                    value: "{values.title}",
                    oninput: move |e| fields.write().title = e.value(),
                }
            }
            label { "Company"
                input {
                    r#type: "text",
                    value: "{values.company}",
                    disabled: editing.is_some(),
                    oninput: move |e| fields.write().company = e.value(),
                }
            }
            label { "Location"
                input {
                    r#type: "text",
                    value: "{values.location}",
                    oninput: move |e| fields.write().location = e.value(),
                }
            }
            label { "Description"
                textarea {
                    value: "{values.description}",
                    oninput: move |e| fields.write().description = e.value(),
                }
            }
            label { "Salary Range"
                input {
                    r#type: "text",
                    value: "{values.salary_range}",
                    oninput: move |e| fields.write().salary_range = e.value(),
                }
            }
            label { "Required Skills (comma separated)"
                input {
                    r#type: "text",
                    value: "{values.skills}",
                    oninput: move |e| fields.write().skills = e.value(),
                }
            }
            label { "Posting Date"
                input {
                    r#type: "date",
                    value: "{values.posting_date}",
                    oninput: move |e| fields.write().posting_date = e.value(),
                }
            }
            label { "Expiration Date"
                input {
                    r#type: "date",
                    value: "{values.expiration_date}",
                    oninput: move |e| fields.write().expiration_date = e.value(),
                }
            }
            button {
                class: "btn btn-primary",
                disabled: saving(),
                onclick: submit,
                "{button_label}"
            }
        }
    }
}
