//! Error types for the Meetup API client.
//!
//! # Design
//! `MissingCredential` is construction-time only: a client without a key is
//! never built. `RemoteFailure` is returned exclusively in
//! [`FailureMode::Strict`](crate::FailureMode) — the default mode swallows
//! non-200 statuses into an empty result instead, so most callers will only
//! ever see `MalformedResponse` and `Transport`.

use std::fmt;

/// Errors returned by [`MeetupClient`](crate::MeetupClient).
#[derive(Debug)]
pub enum ApiError {
    /// No API key was passed explicitly and the environment held none.
    MissingCredential,

    /// The server answered 200 but the body was not valid JSON.
    MalformedResponse(String),

    /// The server returned a non-200 status (strict mode only).
    RemoteFailure { status: u16, body: String },

    /// The HTTP round trip itself failed (connect, DNS, read).
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingCredential => write!(f, "Meetup API key not provided"),
            ApiError::MalformedResponse(msg) => {
                write!(f, "malformed response body: {msg}")
            }
            ApiError::RemoteFailure { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
