//! Fixture-backed fake of the Meetup REST API.
//!
//! # Design
//! Serves one well-known group and event so client tests can exercise both
//! the found and not-found paths. Every route requires the `key` query
//! parameter the real API authenticates with and rejects requests without
//! one as 401. The handlers honor the query knobs the client actually sends
//! (date windows, page truncation, the RSVP answer filter, requested
//! fields); everything else is served straight from cloned fixtures, so the
//! server holds no mutable state.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// The one group the fixtures know about.
pub const FIXTURE_GROUP: &str = "rust-dc";

/// The one event with RSVP fixtures.
pub const FIXTURE_EVENT_ID: u64 = 8675309;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub local_date: String,
    pub yes_rsvp_count: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub urlname: String,
    pub name: String,
    pub members: u64,
    /// Only present when the request asked for it via `fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_event_count: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rsvp {
    pub member: String,
    pub response: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub shortname: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/find/groups", get(find_groups))
        .route("/2/categories", get(categories))
        .route("/{urlname}", get(group))
        .route("/{urlname}/events", get(events))
        .route("/{urlname}/events/{event_id}/rsvps", get(rsvps))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: "259827300".to_string(),
            name: "Embedded Rust Hack Night".to_string(),
            local_date: "2019-03-14".to_string(),
            yes_rsvp_count: 28,
        },
        Event {
            id: "261078477".to_string(),
            name: "Lifetimes and Borrowing".to_string(),
            local_date: "2019-05-02".to_string(),
            yes_rsvp_count: 41,
        },
        Event {
            id: "264972099".to_string(),
            name: "Async Await in Practice".to_string(),
            local_date: "2019-11-19".to_string(),
            yes_rsvp_count: 35,
        },
    ]
}

fn sample_group() -> Group {
    Group {
        urlname: FIXTURE_GROUP.to_string(),
        name: "Rust DC".to_string(),
        members: 1284,
        past_event_count: None,
    }
}

fn sample_groups() -> Vec<Group> {
    vec![
        sample_group(),
        Group {
            urlname: "rust-nyc".to_string(),
            name: "Rust NYC".to_string(),
            members: 4102,
            past_event_count: None,
        },
    ]
}

fn sample_rsvps() -> Vec<Rsvp> {
    vec![
        Rsvp {
            member: "Ada".to_string(),
            response: "yes".to_string(),
        },
        Rsvp {
            member: "Grace".to_string(),
            response: "yes".to_string(),
        },
        Rsvp {
            member: "Linus".to_string(),
            response: "no".to_string(),
        },
    ]
}

fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: 34,
            name: "Tech".to_string(),
            shortname: "tech".to_string(),
        },
        Category {
            id: 32,
            name: "Sports & Recreation".to_string(),
            shortname: "sports-recreation".to_string(),
        },
    ]
}

fn require_key(params: &HashMap<String, String>) -> Result<(), StatusCode> {
    match params.get("key") {
        Some(key) if !key.is_empty() => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

fn page_limit(params: &HashMap<String, String>) -> Option<usize> {
    params.get("page").and_then(|p| p.parse().ok())
}

async fn events(
    Path(urlname): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Event>>, StatusCode> {
    require_key(&params)?;
    if urlname != FIXTURE_GROUP {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut events = sample_events();
    if let Some(earliest) = params.get("no_earlier_than") {
        events.retain(|e| &e.local_date >= earliest);
    }
    if let Some(latest) = params.get("no_later_than") {
        events.retain(|e| &e.local_date <= latest);
    }
    if let Some(page) = page_limit(&params) {
        events.truncate(page);
    }
    Ok(Json(events))
}

async fn group(
    Path(urlname): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Group>, StatusCode> {
    require_key(&params)?;
    if urlname != FIXTURE_GROUP {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut group = sample_group();
    let wants_past_events = params
        .get("fields")
        .is_some_and(|f| f.split(',').any(|field| field.trim() == "past_event_count"));
    if wants_past_events {
        group.past_event_count = Some(127);
    }
    Ok(Json(group))
}

async fn find_groups(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Group>>, StatusCode> {
    require_key(&params)?;
    let mut groups = sample_groups();
    if let Some(page) = page_limit(&params) {
        groups.truncate(page);
    }
    Ok(Json(groups))
}

async fn rsvps(
    Path((urlname, event_id)): Path<(String, u64)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Rsvp>>, StatusCode> {
    require_key(&params)?;
    if urlname != FIXTURE_GROUP || event_id != FIXTURE_EVENT_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut rsvps = sample_rsvps();
    if let Some(filter) = params.get("response") {
        let accepted: Vec<&str> = filter.split(',').map(str::trim).collect();
        rsvps.retain(|r| accepted.contains(&r.response.as_str()));
    }
    Ok(Json(rsvps))
}

async fn categories(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Category>>, StatusCode> {
    require_key(&params)?;
    let mut categories = sample_categories();
    if let Some(page) = page_limit(&params) {
        categories.truncate(page);
    }
    Ok(Json(categories))
}
