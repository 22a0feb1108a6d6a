//! The request client and the per-endpoint builders.
//!
//! # Design
//! `MeetupClient` is immutable once built: base URL, resolved key, failure
//! mode, and transport never change between calls, and no state is shared
//! across requests. Each endpoint method runs a pure `(path, Params)`
//! assembly function and delegates to the single [`MeetupClient::get`]
//! primitive, which injects the credential, form-encodes the query, performs
//! exactly one GET, and branches on the status code in one place.
//!
//! # Failure handling
//! The default [`FailureMode::EmptyResult`] answers every non-200 status
//! with an empty JSON object and a single `tracing` warning. That makes a
//! failed request indistinguishable from a query that legitimately matched
//! nothing, which is how this API's callers have always consumed it — switch
//! to [`FailureMode::Strict`] to get `ApiError::RemoteFailure` instead.

use std::fmt;

use serde_json::{Map, Value};

use crate::credentials;
use crate::error::ApiError;
use crate::http::{Transport, UreqTransport};
use crate::params::Params;
use crate::types::{CategoriesQuery, EventsQuery, FindGroupsQuery, GroupQuery, RsvpsQuery};

/// Production endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.meetup.com";

/// Reserved query parameter carrying the credential.
const KEY_PARAM: &str = "key";

/// What [`MeetupClient::get`] does with a non-200 status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Warn through `tracing` and return `{}`. Callers cannot tell a failed
    /// request apart from an empty result except via the diagnostic.
    #[default]
    EmptyResult,
    /// Return [`ApiError::RemoteFailure`] carrying the status and body.
    Strict,
}

/// Synchronous client for the Meetup REST API.
///
/// Construct with [`MeetupClient::new`]; the API key is resolved once, from
/// the explicit argument or the `MEETUP_KEY` environment variable. Every
/// call performs exactly one HTTP round trip — no retries, no pagination
/// traversal, no caching.
pub struct MeetupClient {
    base_url: String,
    key: String,
    failure_mode: FailureMode,
    transport: Box<dyn Transport>,
}

impl fmt::Debug for MeetupClient {
    // The key stays out of debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeetupClient")
            .field("base_url", &self.base_url)
            .field("failure_mode", &self.failure_mode)
            .finish_non_exhaustive()
    }
}

impl MeetupClient {
    /// Builds a client against the production API with the default `ureq`
    /// transport. Fails with [`ApiError::MissingCredential`] when neither
    /// the argument nor the environment yields a non-empty key.
    pub fn new(key: Option<&str>) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            key: credentials::resolve_key(key)?,
            failure_mode: FailureMode::default(),
            transport: Box::new(UreqTransport::new()),
        })
    }

    /// Points the client at a different endpoint root (trailing slash
    /// stripped). Used by tests to target a local server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Swaps the HTTP transport.
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = failure_mode;
        self
    }

    /// The low-level primitive every endpoint delegates to.
    ///
    /// Inserts the credential under `key` — overwriting any caller-supplied
    /// entry, the credential always wins — form-encodes the parameters, and
    /// performs one GET of `{base_url}{path}?{query}`. A 200 body is decoded
    /// as JSON and returned unchanged; a 200 body that is not JSON is
    /// [`ApiError::MalformedResponse`]; any other status follows the
    /// configured [`FailureMode`].
    pub fn get(&self, path: &str, mut params: Params) -> Result<Value, ApiError> {
        params.insert(KEY_PARAM, self.key.as_str());
        let url = format!("{}{}?{}", self.base_url, path, params.encode());
        let response = self.transport.get(&url)?;
        if response.status == 200 {
            return serde_json::from_str(&response.body)
                .map_err(|e| ApiError::MalformedResponse(e.to_string()));
        }
        match self.failure_mode {
            FailureMode::EmptyResult => {
                tracing::warn!(status = response.status, "API call failed");
                Ok(Value::Object(Map::new()))
            }
            FailureMode::Strict => Err(ApiError::RemoteFailure {
                status: response.status,
                body: response.body,
            }),
        }
    }

    /// Lists a group's events.
    pub fn get_events(&self, urlname: &str, query: &EventsQuery) -> Result<Value, ApiError> {
        let (path, params) = events_request(urlname, query);
        self.get(&path, params)
    }

    /// Fetches one group's metadata.
    pub fn get_group(&self, urlname: &str, query: &GroupQuery) -> Result<Value, ApiError> {
        let (path, params) = group_request(urlname, query);
        self.get(&path, params)
    }

    /// Searches for groups.
    pub fn find_groups(&self, query: &FindGroupsQuery) -> Result<Value, ApiError> {
        let (path, params) = find_groups_request(query);
        self.get(&path, params)
    }

    /// Lists the members who answered an event's RSVP.
    pub fn get_event_rsvps(
        &self,
        urlname: &str,
        event_id: u64,
        query: &RsvpsQuery,
    ) -> Result<Value, ApiError> {
        let (path, params) = rsvps_request(urlname, event_id, query);
        self.get(&path, params)
    }

    /// Lists the site-wide interest categories.
    pub fn get_categories(&self, query: &CategoriesQuery) -> Result<Value, ApiError> {
        let (path, params) = categories_request(query);
        self.get(&path, params)
    }
}

fn events_request(urlname: &str, query: &EventsQuery) -> (String, Params) {
    let mut params = Params::new();
    params.set_number("page", query.page);
    params.set_text("scroll", query.scroll.as_deref());
    params.set_text("no_later_than", query.no_later_than.as_deref());
    params.set_text("no_earlier_than", query.no_earlier_than.as_deref());
    (format!("/{urlname}/events"), params)
}

fn group_request(urlname: &str, query: &GroupQuery) -> (String, Params) {
    let mut params = Params::new();
    params.set_list("fields", query.fields.as_ref());
    (format!("/{urlname}"), params)
}

fn find_groups_request(query: &FindGroupsQuery) -> (String, Params) {
    let mut params = Params::new();
    params.set_number("page", query.page);
    params.set_text("zip", query.zip.as_deref());
    params.set_number("radius", query.radius);
    params.set_list("category", query.category.as_ref());
    params.set_list("fields", query.fields.as_ref());
    params.set_text("order", query.order.as_deref());
    ("/find/groups".to_string(), params)
}

fn rsvps_request(urlname: &str, event_id: u64, query: &RsvpsQuery) -> (String, Params) {
    let mut params = Params::new();
    params.set_text("response", query.response.as_deref());
    (format!("/{urlname}/events/{event_id}/rsvps"), params)
}

fn categories_request(query: &CategoriesQuery) -> (String, Params) {
    let mut params = Params::new();
    params.set_number("page", query.page);
    ("/2/categories".to_string(), params)
}
