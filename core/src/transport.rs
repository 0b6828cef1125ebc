//! Transport implementations that execute built requests.
//!
//! # Design
//! `HttpTransport` is the seam between the sans-io client and the network:
//! tests substitute a scripted fake, production code uses [`UreqTransport`].
//! A transport only moves bytes — it must return non-2xx responses as data
//! (never as errors) so the parse methods own status interpretation.

use std::time::Duration;

use log::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round trip. Implementations must not retry and must
/// surface non-2xx statuses as an `HttpResponse`, reserving `Err` for
/// transport-level failures (unreachable host, timeout, broken connection).
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a ureq agent.
///
/// Status-code-as-error is disabled so 4xx/5xx responses come back as data,
/// and an optional global timeout bounds each call end to end.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
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

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("{} {}", request.method.as_str(), request.url);

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => {
                with_headers(self.agent.get(&request.url), &request.headers).call()
            }
            (HttpMethod::Delete, _) => {
                with_headers(self.agent.delete(&request.url), &request.headers).call()
            }
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&request.url), &request.headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(&request.url), &request.headers).send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&request.url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                with_headers(self.agent.put(&request.url), &request.headers).send_empty()
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!("{} {} -> {status}", request.method.as_str(), request.url);

        Ok(HttpResponse { status, body })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
