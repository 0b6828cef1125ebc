//! Error types for the Draftsmith API client.
//!
//! # Design
//! One variant per failure kind, so callers can match on what went wrong:
//! local validation, transport failure, backend status, or a body that does
//! not decode. `NotFound` gets a dedicated variant because callers routinely
//! distinguish "the resource does not exist" from "the server returned an
//! unexpected status"; every other non-2xx response lands in `Http` with the
//! raw status code and body.

use thiserror::Error;

/// Errors surfaced by the client. Nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload failed a local constraint check; no request was
    /// sent.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The network round trip itself failed: unreachable host, timeout, or
    /// a connection error.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server returned 404 — the requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned an unexpected status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(String),

    /// The response body was not valid JSON or did not match the expected
    /// shape.
    #[error("failed to deserialize response body: {0}")]
    Deserialization(String),
}
