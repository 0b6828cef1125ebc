//! HTTP requests and responses described as plain data.
//!
//! # Design
//! The client never touches the network directly. `DraftsmithClient::build_*`
//! methods produce `HttpRequest` values and `parse_*` methods consume
//! `HttpResponse` values; an [`HttpTransport`](crate::transport::HttpTransport)
//! implementation sits in between and performs the actual round trip. Keeping
//! the boundary as owned plain data makes every request and response
//! constructible in tests without a server.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A request built by `DraftsmithClient::build_*`.
///
/// `url` is the full URL including the configured base. `headers` carries
/// the content type when a body is present and the bearer token when one is
/// configured.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A response as seen by `DraftsmithClient::parse_*`.
///
/// Constructed by the transport after executing an `HttpRequest`. Non-2xx
/// statuses are carried as data; status interpretation belongs to the
/// parse methods, not the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
