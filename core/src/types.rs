//! Per-endpoint query options.
//!
//! # Design
//! One struct per operation, all fields optional. `Default` carries the
//! values the API expects when the caller says nothing (page sizes, the
//! event scroll window, the RSVP answer filter); set a field to `None` — or
//! to a falsy value — to drop it from the request entirely. Enumerated
//! strings (`scroll`, `order`, `response`) are passed through unchecked: the
//! server owns its accepted value sets, and an invalid value surfaces as a
//! non-200 status.
//!
//! The structs deserialize with `#[serde(default)]` so test vectors can
//! state partial inputs as JSON and still pick up the real defaults.

use serde::Deserialize;

use crate::params::CsvList;

/// Options for listing a group's events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventsQuery {
    pub page: Option<u64>,
    /// Which direction to scan from today: `"past"`, `"future_or_past"`, ...
    pub scroll: Option<String>,
    /// ISO date upper bound, e.g. `"2019-04-01"`.
    pub no_later_than: Option<String>,
    /// ISO date lower bound.
    pub no_earlier_than: Option<String>,
}

impl Default for EventsQuery {
    fn default() -> Self {
        Self {
            page: Some(1000),
            scroll: Some("future_or_past".to_string()),
            no_later_than: None,
            no_earlier_than: None,
        }
    }
}

/// Options for fetching one group's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupQuery {
    /// Extra response fields to request, e.g. `past_event_count`.
    pub fields: Option<CsvList>,
}

/// Options for the group search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FindGroupsQuery {
    pub page: Option<u64>,
    /// Postal code to center the search on (a string — leading zeros matter).
    pub zip: Option<String>,
    /// Search radius in miles.
    pub radius: Option<u64>,
    /// Category ids to restrict the search to.
    pub category: Option<CsvList>,
    pub fields: Option<CsvList>,
    pub order: Option<String>,
}

impl Default for FindGroupsQuery {
    fn default() -> Self {
        Self {
            page: Some(20),
            zip: None,
            radius: None,
            category: None,
            fields: None,
            order: None,
        }
    }
}

/// Options for listing an event's RSVPs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RsvpsQuery {
    /// Comma-separated answers to include, e.g. `"yes"` or `"yes,no"`.
    pub response: Option<String>,
}

impl Default for RsvpsQuery {
    fn default() -> Self {
        Self {
            response: Some("yes,no".to_string()),
        }
    }
}

/// Options for listing categories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CategoriesQuery {
    pub page: Option<u64>,
}

impl Default for CategoriesQuery {
    fn default() -> Self {
        Self { page: Some(50) }
    }
}
