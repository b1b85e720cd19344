//! The one mapping between `QueryState` and a URL query string.
//!
//! `encode` leaves out every field equal to its default, so URLs stay short and
//! stable. `decode` never fails: a missing, malformed or out-of-range field decodes
//! to its default, so a hand-edited URL still renders a usable listing.

use std::num::NonZeroU32;

use url::form_urlencoded;

use crate::{DecodeDefaulted, OrderBy, QueryState, StatusFilter};

pub const KEY_SEARCH: &str = "search";
pub const KEY_STATUS: &str = "status";
pub const KEY_LOCATION: &str = "location";
pub const KEY_COMPANY: &str = "company";
pub const KEY_ORDER_BY: &str = "order_by";
pub const KEY_PAGE: &str = "page";
pub const KEY_PAGE_SIZE: &str = "page_size";

const KEYS: [&str; 7] = [
    KEY_SEARCH,
    KEY_STATUS,
    KEY_LOCATION,
    KEY_COMPANY,
    KEY_ORDER_BY,
    KEY_PAGE,
    KEY_PAGE_SIZE,
];

/// Serialize `state` for the address bar, omitting defaulted fields.
pub fn encode(state: &QueryState) -> String {
    let defaults = QueryState::default();
    let mut out = form_urlencoded::Serializer::new(String::new());

    if state.search != defaults.search {
        out.append_pair(KEY_SEARCH, &state.search);
    }
    if state.status != defaults.status {
        out.append_pair(KEY_STATUS, state.status.as_str());
    }
    if state.location != defaults.location {
        out.append_pair(KEY_LOCATION, &state.location);
    }
    if state.company != defaults.company {
        out.append_pair(KEY_COMPANY, &state.company);
    }
    if state.order_by != defaults.order_by {
        out.append_pair(KEY_ORDER_BY, state.order_by.as_str());
    }
    if state.page != defaults.page {
        out.append_pair(KEY_PAGE, &state.page.to_string());
    }
    if state.page_size != defaults.page_size {
        out.append_pair(KEY_PAGE_SIZE, &state.page_size.to_string());
    }

    out.finish()
}

/// Query string of an explicit reset: only `page=1`, every other key absent.
pub fn encode_reset() -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(KEY_PAGE, "1")
        .finish()
}

/// Parameters of the list request. Sort and paging keys are always sent so the
/// result never depends on server-side defaults; blank text filters are left out.
pub fn api_query(state: &QueryState) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    for (key, value) in [
        (KEY_SEARCH, state.search.as_str()),
        (KEY_STATUS, state.status.as_str()),
        (KEY_LOCATION, state.location.as_str()),
        (KEY_COMPANY, state.company.as_str()),
    ] {
        if !value.is_empty() {
            out.append_pair(key, value);
        }
    }
    out.append_pair(KEY_ORDER_BY, state.order_by.as_str());
    out.append_pair(KEY_PAGE, &state.page.to_string());
    out.append_pair(KEY_PAGE_SIZE, &state.page_size.to_string());

    out.finish()
}

/// Parse a query string (with or without the leading `?`) into a `QueryState`.
pub fn decode(query: &str) -> QueryState {
    let (state, defaulted) = decode_reporting(query);
    for field in &defaulted {
        tracing::debug!(key = field.key, raw = %field.raw, "query field replaced by default");
    }
    state
}

/// Like `decode`, also returning the fields that were present but unusable.
///
/// The first occurrence of a repeated key wins; unknown keys are ignored.
pub fn decode_reporting(query: &str) -> (QueryState, Vec<DecodeDefaulted>) {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = QueryState::default();
    let mut defaulted = Vec::new();
    let mut seen = [false; KEYS.len()];

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let Some(index) = KEYS.iter().position(|k| *k == key) else {
            continue;
        };
        if std::mem::replace(&mut seen[index], true) {
            continue;
        }
        let key = KEYS[index];

        match key {
            KEY_SEARCH => state.search = value.into_owned(),
            KEY_LOCATION => state.location = value.into_owned(),
            KEY_COMPANY => state.company = value.into_owned(),
            KEY_STATUS => match StatusFilter::parse(&value) {
                Some(status) => state.status = status,
                None => defaulted.push(DecodeDefaulted { key, raw: value.into_owned() }),
            },
            KEY_ORDER_BY => match OrderBy::parse(&value) {
                Some(order_by) => state.order_by = order_by,
                None => defaulted.push(DecodeDefaulted { key, raw: value.into_owned() }),
            },
            KEY_PAGE => match parse_positive(&value) {
                Some(page) => state.page = page,
                None => defaulted.push(DecodeDefaulted { key, raw: value.into_owned() }),
            },
            KEY_PAGE_SIZE => match parse_positive(&value) {
                Some(page_size) => state.page_size = page_size,
                None => defaulted.push(DecodeDefaulted { key, raw: value.into_owned() }),
            },
            _ => {}
        }
    }

    (state, defaulted)
}

fn parse_positive(raw: &str) -> Option<NonZeroU32> {
    raw.trim().parse::<u32>().ok().and_then(NonZeroU32::new)
}

impl std::fmt::Display for QueryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode(self))
    }
}

impl From<&str> for QueryState {
    fn from(query: &str) -> Self {
        decode(query)
    }
}
