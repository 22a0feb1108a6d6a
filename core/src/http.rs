//! The HTTP seam between the client and the network.
//!
//! # Design
//! The client only ever needs one primitive: a synchronous GET of a fully
//! formed URL that hands back the status code and raw text body. `Transport`
//! captures exactly that, so tests can substitute canned responses and the
//! production path stays a single `ureq` call. Status interpretation lives in
//! the client, not here — the transport must return 4xx/5xx responses as
//! data, never as errors.

use crate::error::ApiError;

/// An HTTP response reduced to what the client reads.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// One synchronous HTTP GET.
///
/// Implementations own everything the client deliberately does not:
/// timeouts, TLS, connection reuse. `Err` is reserved for failures of the
/// round trip itself; a served non-200 status is an `Ok` response.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

/// Default transport backed by a shared [`ureq::Agent`].
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Builds an agent with `http_status_as_error` disabled so 4xx/5xx
    /// responses come back as data for the client to interpret.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
