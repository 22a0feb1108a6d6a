//! API key resolution.
//!
//! The key comes from an explicit argument or, failing that, the
//! `MEETUP_KEY` environment variable. Resolution happens exactly once, at
//! client construction; a client without a key is never built. Beyond
//! non-emptiness the key is not validated — the server is the authority on
//! what a valid key looks like.

use std::env;

use crate::error::ApiError;

/// Environment variable consulted when no explicit key is given.
pub const KEY_ENV_VAR: &str = "MEETUP_KEY";

/// Resolves the API key: an explicit non-empty key wins over the
/// environment, and an empty/absent pair of sources is a hard error.
///
/// An explicit empty string counts as "not provided" and falls through to
/// the environment.
pub fn resolve_key(explicit: Option<&str>) -> Result<String, ApiError> {
    if let Some(key) = explicit {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    match env::var(KEY_ENV_VAR) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(ApiError::MissingCredential),
    }
}
