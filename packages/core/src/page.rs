//! One fetched page of the listing.

use std::num::NonZeroU32;

use serde::Deserialize;

use crate::{ApiError, JobSummary, QueryState};

/// Result of one list request. Built fresh per fetch, never cached across states.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub items: Vec<JobSummary>,
    pub total: u64,
    pub page: NonZeroU32,
    pub page_size: NonZeroU32,
    /// `ceil(total / page_size)`, and 1 for an empty result.
    pub total_pages: NonZeroU32,
}

impl PageResult {
    pub fn new(
        items: Vec<JobSummary>,
        total: u64,
        page: NonZeroU32,
        page_size: NonZeroU32,
    ) -> Self {
        let pages = total.div_ceil(u64::from(page_size.get()));
        let total_pages =
            NonZeroU32::new(u32::try_from(pages).unwrap_or(u32::MAX)).unwrap_or(NonZeroU32::MIN);
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }

    /// Parse a list response body.
    ///
    /// Accepts the paginated envelope or a bare array. A bare array counts as the
    /// whole result set of the requested page. Any other shape, including an
    /// envelope without `total` or with one malformed job, is `ResponseInvalid`.
    pub fn from_response(body: &[u8], requested: &QueryState) -> Result<Self, ApiError> {
        let parsed: ListResponse = serde_json::from_slice(body)
            .map_err(|e| ApiError::ResponseInvalid(format!("unexpected list shape: {e}")))?;

        match parsed {
            ListResponse::Paginated(envelope) => {
                let total = envelope.total;
                let page = envelope
                    .page
                    .and_then(NonZeroU32::new)
                    .unwrap_or(requested.page);
                let page_size = envelope
                    .page_size
                    .and_then(NonZeroU32::new)
                    .unwrap_or(requested.page_size);
                Ok(Self::new(envelope.items, total, page, page_size))
            }
            ListResponse::Bare(items) => {
                let total = items.len() as u64;
                Ok(Self::new(items, total, requested.page, requested.page_size))
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse {
    Paginated(Envelope),
    Bare(Vec<JobSummary>),
}

#[derive(Deserialize)]
struct Envelope {
    items: Vec<JobSummary>,
    total: u64,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use serde_json::{Value, json};

    fn job(id: i64) -> Value {
        json!({
            "id": id,
            "title": format!("Job {id}"),
            "company": "Acme",
            "location": "Remote",
            "description": "",
            "required_skills": [],
            "posting_date": "2024-03-01",
            "expiration_date": "2024-04-01",
            "status": "active"
        })
    }

    fn nz(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn total_pages_rounds_up_and_never_drops_below_one() {
        assert_eq!(PageResult::new(vec![], 0, nz(1), nz(10)).total_pages.get(), 1);
        assert_eq!(PageResult::new(vec![], 10, nz(1), nz(10)).total_pages.get(), 1);
        assert_eq!(PageResult::new(vec![], 11, nz(1), nz(10)).total_pages.get(), 2);
        assert_eq!(PageResult::new(vec![], 95, nz(1), nz(10)).total_pages.get(), 10);
    }

    #[test]
    fn parses_envelope() {
        let items: Vec<Value> = (1..=7).map(job).collect();
        let body = json!({
            "items": items,
            "total": 7,
            "page": 1,
            "page_size": 10,
            "total_pages": 1
        });
        let result =
            PageResult::from_response(body.to_string().as_bytes(), &QueryState::default()).unwrap();
        assert_eq!(result.items.len(), 7);
        assert_eq!(result.total, 7);
        assert_eq!(result.total_pages.get(), 1);
    }

    #[test]
    fn envelope_drives_page_count() {
        let body = json!({ "items": [job(11)], "total": 31, "page": 4, "page_size": 10 });
        let result =
            PageResult::from_response(body.to_string().as_bytes(), &QueryState::default()).unwrap();
        assert_eq!(result.page.get(), 4);
        assert_eq!(result.total_pages.get(), 4);
    }

    #[test]
    fn parses_bare_array() {
        let requested = QueryState {
            page: nz(3),
            ..QueryState::default()
        };
        let body = Value::Array(vec![job(1), job(2)]);
        let result = PageResult::from_response(body.to_string().as_bytes(), &requested).unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.page.get(), 3);
        assert_eq!(result.total_pages.get(), 1);
    }

    #[test]
    fn rejects_unexpected_shapes() {
        let bodies = [
            json!({ "detail": "nope" }).to_string(),
            json!({ "items": "not a list", "total": 1 }).to_string(),
            json!({ "items": [job(1), { "id": "broken" }], "total": 2 }).to_string(),
            json!({ "items": [], "page": 3 }).to_string(),
            json!({ "items": [job(1)], "total": null }).to_string(),
            "not json".to_string(),
        ];
        for body in bodies {
            let err = PageResult::from_response(body.as_bytes(), &QueryState::default()).unwrap_err();
            assert!(matches!(err, ApiError::ResponseInvalid(_)), "body {body}");
        }
    }
}
