//! Error types shared by the client crates.

use chrono::NaiveDate;

/// Message shown when a failure carries no server-provided detail.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch jobs";

/// Failure talking to the jobs API.
///
/// All variants are terminal for the query that produced them; nothing retries
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network or transport failure before a response arrived.
    #[error("request failed: {0}")]
    FetchFailed(String),

    /// A 2xx response whose body does not have the expected shape.
    #[error("invalid response: {0}")]
    ResponseInvalid(String),

    /// A non-2xx response, with the server's `detail` message when it sent one.
    #[error("server returned {status}{}", detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    ResponseError { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Text for the "failed to load" view.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::ResponseError {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}

/// A draft filter edit that names an unknown field or an out-of-enum value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

/// Job form input that cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("expiration date {expiration} is before posting date {posting}")]
    ExpiresBeforePosting {
        posting: NaiveDate,
        expiration: NaiveDate,
    },
}

/// A URL query field that decode replaced with its default.
///
/// Never surfaced to the user; returned by `decode_reporting` and logged by `decode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeDefaulted {
    pub key: &'static str,
    pub raw: String,
}
