#![allow(clippy::disallowed_methods)]

mod common;

use std::error::Error;
use std::num::NonZeroU32;
use std::sync::{Arc, Mutex};

use api::{ApiError, HttpJobsApi, JobDraft, JobId, JobListing, QueryState};
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use jobs_core::{JobStatus, OrderBy, StatusFilter};
use serde_json::{Value, json};

type Seen = Arc<Mutex<Vec<String>>>;

async fn listing(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Json<Value> {
    seen.lock().unwrap().push(query.unwrap_or_default());
    let items: Vec<Value> = (1..=7).map(common::job_json).collect();
    Json(json!({
        "items": items,
        "total": 7,
        "page": 1,
        "page_size": 10,
        "total_pages": 1
    }))
}

fn listing_router() -> (Router, Seen) {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route("/api/jobs", get(listing))
        .with_state(seen.clone());
    (router, seen)
}

#[tokio::test]
async fn list_jobs_sends_criteria_and_reads_envelope() -> Result<(), Box<dyn Error>> {
    let (router, seen) = listing_router();
    let api = HttpJobsApi::new(common::serve(router).await?);

    let query = QueryState {
        search: "engineer".into(),
        status: StatusFilter::Only(JobStatus::Active),
        order_by: OrderBy::ExpirationDate,
        ..QueryState::default()
    };
    let page = api.list_jobs(&query).await?;

    assert_eq!(page.items.len(), 7);
    assert_eq!(page.total, 7);
    assert_eq!(page.total_pages.get(), 1);
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        ["search=engineer&status=active&order_by=expiration_date&page=1&page_size=10"]
    );
    Ok(())
}

#[tokio::test]
async fn list_jobs_accepts_bare_array() -> Result<(), Box<dyn Error>> {
    let router = Router::new().route(
        "/api/jobs",
        get(|| async { Json(json!([common::job_json(1), common::job_json(2)])) }),
    );
    let api = HttpJobsApi::new(common::serve(router).await?);

    let query = QueryState {
        page: NonZeroU32::new(2).unwrap(),
        ..QueryState::default()
    };
    let page = api.list_jobs(&query).await?;
    assert_eq!(page.total, 2);
    assert_eq!(page.page.get(), 2);
    assert_eq!(page.total_pages.get(), 1);
    Ok(())
}

#[tokio::test]
async fn error_status_carries_server_detail() -> Result<(), Box<dyn Error>> {
    let router = Router::new()
        .route(
            "/api/jobs",
            get(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": "page must be positive" })),
                )
            }),
        )
        .route(
            "/api/jobs/:id",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>") }),
        );
    let api = HttpJobsApi::new(common::serve(router).await?);

    let err = api.list_jobs(&QueryState::default()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::ResponseError {
            status: 422,
            detail: Some("page must be positive".into())
        }
    );
    assert_eq!(err.user_message(), "page must be positive");

    let err = api.get_job(JobId(3)).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::ResponseError {
            status: 500,
            detail: None
        }
    );
    assert_eq!(err.user_message(), jobs_core::GENERIC_FETCH_ERROR);
    Ok(())
}

#[tokio::test]
async fn success_with_wrong_shape_is_invalid() -> Result<(), Box<dyn Error>> {
    let router = Router::new().route(
        "/api/jobs",
        get(|| async { Json(json!({ "results": [], "count": 0 })) }),
    );
    let api = HttpJobsApi::new(common::serve(router).await?);

    let err = api.list_jobs(&QueryState::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::ResponseInvalid(_)));
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_fetch_failure() -> Result<(), Box<dyn Error>> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let api = HttpJobsApi::new(common::config_for(addr));
    let err = api.list_jobs(&QueryState::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::FetchFailed(_)));
    Ok(())
}

#[tokio::test]
async fn job_record_round_trips() -> Result<(), Box<dyn Error>> {
    async fn echo_created(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let mut job = common::job_json(42);
        job["title"] = body["title"].clone();
        job["posting_date"] = body["posting_date"].clone();
        (StatusCode::OK, Json(job))
    }
    async fn echo_updated(Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
        let mut job = common::job_json(id);
        job["title"] = body["title"].clone();
        Json(job)
    }

    let router = Router::new()
        .route("/api/jobs", axum::routing::post(echo_created))
        .route(
            "/api/jobs/:id",
            get(|Path(id): Path<i64>| async move { Json(common::job_json(id)) })
                .put(echo_updated)
                .delete(|| async { Json(json!({ "success": true })) }),
        );
    let api = HttpJobsApi::new(common::serve(router).await?);

    let job = api.get_job(JobId(5)).await?;
    assert_eq!(job.id, JobId(5));
    assert_eq!(job.posting_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

    let draft = JobDraft {
        title: "Data Engineer".into(),
        company: "Acme".into(),
        location: "Lisbon".into(),
        description: "Pipelines".into(),
        salary_range: Some("90k".into()),
        required_skills: vec!["sql".into(), "python".into()],
        posting_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        expiration_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
    };
    let created = api.create_job(&draft).await?;
    assert_eq!(created.id, JobId(42));
    assert_eq!(created.title, "Data Engineer");
    assert_eq!(created.posting_date, draft.posting_date);

    let updated = api.update_job(JobId(9), &draft).await?;
    assert_eq!(updated.id, JobId(9));
    assert_eq!(updated.title, "Data Engineer");

    api.delete_job(JobId(9)).await?;
    Ok(())
}
