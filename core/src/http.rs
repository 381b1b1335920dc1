//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and interprets `HttpResponse` values without ever opening a
//! socket — whatever hosts the controller (an integration test, a console
//! front end) executes the round-trip in between. Each user action maps to
//! exactly one request; there is no queueing, retry, or cancellation, so
//! the transport surface stays this small.
//!
//! All fields are owned (`String`, `Vec`) so values can be handed across
//! threads or stored without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ShopcartClient::build_*` methods. The host executes it against
/// the backend and hands the resulting `HttpResponse` back for parsing.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `ShopcartClient::parse_*` for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
