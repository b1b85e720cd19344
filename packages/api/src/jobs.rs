//! HTTP client for the jobs API.

use jobs_core::{ApiError, Job, JobDraft, JobId, PageResult, QueryState, codec};
use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::ApiConfig;

/// Source of listing pages. The listing controller only needs this much of the API.
#[allow(async_fn_in_trait)]
pub trait JobListing {
    async fn list_jobs(&self, query: &QueryState) -> Result<PageResult, ApiError>;
}

/// Client for `/api/jobs`. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpJobsApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpJobsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::FetchFailed(format!("invalid endpoint {path}: {e}")))
    }

    /// `GET /api/jobs/{id}`
    pub async fn get_job(&self, id: JobId) -> Result<Job, ApiError> {
        let url = self.endpoint(&format!("api/jobs/{id}"))?;
        tracing::info!(job_id = %id, "fetching job");
        let body = send(self.http.get(url)).await?;
        parse_json(&body)
    }

    /// `POST /api/jobs`
    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job, ApiError> {
        let url = self.endpoint("api/jobs")?;
        tracing::info!(title = %draft.title, "creating job");
        let body = send(self.http.post(url).json(draft)).await?;
        parse_json(&body)
    }

    /// `PUT /api/jobs/{id}`. The server keeps the original company name.
    pub async fn update_job(&self, id: JobId, draft: &JobDraft) -> Result<Job, ApiError> {
        let url = self.endpoint(&format!("api/jobs/{id}"))?;
        tracing::info!(job_id = %id, "updating job");
        let body = send(self.http.put(url).json(draft)).await?;
        parse_json(&body)
    }

    /// `DELETE /api/jobs/{id}`
    pub async fn delete_job(&self, id: JobId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("api/jobs/{id}"))?;
        tracing::info!(job_id = %id, "deleting job");
        send(self.http.delete(url)).await?;
        Ok(())
    }
}

impl JobListing for HttpJobsApi {
    /// `GET /api/jobs?...`
    async fn list_jobs(&self, query: &QueryState) -> Result<PageResult, ApiError> {
        let mut url = self.endpoint("api/jobs")?;
        url.set_query(Some(&codec::api_query(query)));
        tracing::info!(%url, "fetching job listing");
        let body = send(self.http.get(url)).await?;
        PageResult::from_response(&body, query)
    }
}

/// Send a request and return the body of a 2xx response.
async fn send(request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
    let response = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, "jobs API unreachable");
        ApiError::FetchFailed(e.to_string())
    })?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::FetchFailed(format!("failed reading response body: {e}")))?;

    if !status.is_success() {
        let detail = error_detail(&body);
        tracing::warn!(status = status.as_u16(), detail = ?detail, "jobs API returned an error");
        return Err(ApiError::ResponseError {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(body.to_vec())
}

/// The `detail` message of an error body, when it is a plain string.
fn error_detail(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    match serde_json::from_slice::<ErrorBody>(body).ok()?.detail {
        serde_json::Value::String(detail) => Some(detail),
        _ => None,
    }
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::ResponseInvalid(e.to_string()))
}
