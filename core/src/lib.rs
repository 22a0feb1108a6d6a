//! Synchronous client for the Meetup.com REST API.
//!
//! # Overview
//! Resolves an API key once at construction (explicit argument or the
//! `MEETUP_KEY` environment variable), builds form-encoded query strings per
//! endpoint, performs exactly one HTTP GET per call through a pluggable
//! [`Transport`], and normalizes every response into a `serde_json::Value`.
//!
//! # Design
//! - `MeetupClient` is immutable after construction; there is no shared
//!   mutable state between calls and no internal concurrency.
//! - Each endpoint method assembles `(path, Params)` through a pure function
//!   and delegates to the single `get` primitive.
//! - Unset or falsy optional parameters are omitted from the query entirely;
//!   list-valued parameters join into one comma-and-space-separated value.
//! - A non-200 status returns an empty object plus one `tracing` warning by
//!   default; [`FailureMode::Strict`] turns it into an error instead. No
//!   retries, no pagination traversal, no caching.

pub mod client;
pub mod credentials;
pub mod error;
pub mod http;
pub mod params;
pub mod types;

pub use client::{FailureMode, MeetupClient, DEFAULT_BASE_URL};
pub use credentials::KEY_ENV_VAR;
pub use error::ApiError;
pub use http::{HttpResponse, Transport, UreqTransport};
pub use params::{CsvList, ParamValue, Params};
pub use types::{CategoriesQuery, EventsQuery, FindGroupsQuery, GroupQuery, RsvpsQuery};
