//! Filter, sort and page criteria of the listing view.

use std::num::NonZeroU32;

use crate::{JobStatus, QueryError};

pub const DEFAULT_PAGE: NonZeroU32 = NonZeroU32::MIN;
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(size) => size,
    None => NonZeroU32::MIN,
};

/// Status filter of the listing; `Any` means no filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    Any,
    Only(JobStatus),
}

impl StatusFilter {
    /// Wire value; `Any` is the empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::Any => "",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return Some(StatusFilter::Any);
        }
        JobStatus::parse(s).map(StatusFilter::Only)
    }
}

/// Sort key; the server always sorts newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderBy {
    #[default]
    PostingDate,
    ExpirationDate,
}

impl OrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderBy::PostingDate => "posting_date",
            OrderBy::ExpirationDate => "expiration_date",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "posting_date" => Some(OrderBy::PostingDate),
            "expiration_date" => Some(OrderBy::ExpirationDate),
            _ => None,
        }
    }
}

/// The committed criteria of one navigation event.
///
/// Always fully defaulted. A new value is built for every change; equality of two
/// values decides whether a navigation needs a new fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub search: String,
    pub status: StatusFilter,
    pub location: String,
    pub company: String,
    pub order_by: OrderBy,
    pub page: NonZeroU32,
    pub page_size: NonZeroU32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::Any,
            location: String::new(),
            company: String::new(),
            order_by: OrderBy::PostingDate,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Same criteria on another page.
    pub fn with_page(&self, page: NonZeroU32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// The user-editable subset of this state.
    pub fn filters(&self) -> FilterDraft {
        FilterDraft {
            search: self.search.clone(),
            status: self.status,
            location: self.location.clone(),
            company: self.company.clone(),
            order_by: self.order_by,
        }
    }

    /// Apply `draft` on top of this state. The page goes back to the first one: a
    /// page number from the previous result set means nothing for the new one.
    pub fn with_filters(&self, draft: &FilterDraft) -> Self {
        Self {
            search: draft.search.clone(),
            status: draft.status,
            location: draft.location.clone(),
            company: draft.company.clone(),
            order_by: draft.order_by,
            page: DEFAULT_PAGE,
            page_size: self.page_size,
        }
    }
}

/// Field names of the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Status,
    Location,
    Company,
    OrderBy,
}

impl std::str::FromStr for FilterField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(FilterField::Search),
            "status" => Ok(FilterField::Status),
            "location" => Ok(FilterField::Location),
            "company" => Ok(FilterField::Company),
            "orderBy" | "order_by" => Ok(FilterField::OrderBy),
            other => Err(QueryError::UnknownField(other.to_string())),
        }
    }
}

/// Filter values being edited but not yet applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub search: String,
    pub status: StatusFilter,
    pub location: String,
    pub company: String,
    pub order_by: OrderBy,
}

impl FilterDraft {
    /// Update one field from its form value. Enum fields only take their wire values;
    /// the draft is left untouched on error.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), QueryError> {
        match field {
            FilterField::Search => self.search = value.to_string(),
            FilterField::Location => self.location = value.to_string(),
            FilterField::Company => self.company = value.to_string(),
            FilterField::Status => {
                self.status = StatusFilter::parse(value).ok_or_else(|| QueryError::InvalidValue {
                    field: "status",
                    value: value.to_string(),
                })?;
            }
            FilterField::OrderBy => {
                self.order_by = OrderBy::parse(value).ok_or_else(|| QueryError::InvalidValue {
                    field: "orderBy",
                    value: value.to_string(),
                })?;
            }
        }
        Ok(())
    }
}
