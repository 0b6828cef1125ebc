//! Stateless request builder and response parser for the Draftsmith API.
//!
//! # Design
//! `DraftsmithClient` holds only a base URL and an optional bearer token;
//! it carries no mutable state between calls. Each API operation is split
//! into a `build_*` method that produces an [`HttpRequest`] and a `parse_*`
//! method that consumes an [`HttpResponse`]. The transport executes the
//! round trip in between, keeping this layer deterministic and free of I/O.
//!
//! Operations are grouped per resource: [`notes`], [`tags`], [`tasks`].

pub mod notes;
pub mod tags;
pub mod tasks;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Base URL a local Draftsmith backend listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:37240";

/// Synchronous, stateless client for the Draftsmith API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Use [`Draftsmith`](crate::api::Draftsmith) for the
/// blocking one-call-per-operation surface.
#[derive(Debug, Clone)]
pub struct DraftsmithClient {
    base_url: String,
    token: Option<String>,
}

impl DraftsmithClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to every request built by this client.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = &self.token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }

    fn get(&self, path: &str) -> HttpRequest {
        self.request(HttpMethod::Get, path, None)
    }

    fn delete(&self, path: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, path, None)
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(method, path, Some(body)))
    }
}

/// Map non-expected status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the status, then decode the body into `T`.
fn decode<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Check the status of a response whose body is ignored.
fn expect_status(response: HttpResponse, expected: u16) -> Result<(), ApiError> {
    check_status(&response, expected)
}
