//! Error types for the shopcart client.
//!
//! # Design
//! Every failure an operation can surface is decoded into one
//! `OperationError`, exactly once per response. The backend sends error
//! bodies shaped `{status, error, message}`; only `message` matters to the
//! user-facing flash, so `from_response` extracts it here and no operation
//! handler touches response JSON on the failure path. A failure body with
//! no `message` field falls back to "Server error!" instead of leaking a
//! raw body or an empty string.

use std::fmt;

use crate::http::HttpResponse;

const GENERIC_SERVER_ERROR: &str = "Server error!";

/// Unified failure for a lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// A 4xx whose body carried a backend `message` — a validation or
    /// business rejection, surfaced verbatim to the user.
    Validation { message: String },

    /// Any other non-success status. `message` holds the backend `message`
    /// field when present, otherwise the generic fallback.
    Server { status: u16, message: String },

    /// Transport failure reported by the host; no response was received.
    Network { message: String },
}

impl OperationError {
    /// Client-side rejection (missing form field, unencodable payload).
    pub fn validation(message: impl Into<String>) -> Self {
        OperationError::Validation {
            message: message.into(),
        }
    }

    /// Transport failure, constructed by the host executing the request.
    pub fn network(message: impl Into<String>) -> Self {
        OperationError::Network {
            message: message.into(),
        }
    }

    /// Decode a non-success response into the matching variant.
    pub fn from_response(response: &HttpResponse) -> Self {
        let message = extract_message(&response.body);
        if (400..500).contains(&response.status) {
            if let Some(message) = message {
                return OperationError::Validation { message };
            }
        }
        OperationError::Server {
            status: response.status,
            message: message.unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
        }
    }

    /// The user-facing text for the flash area.
    pub fn message(&self) -> &str {
        match self {
            OperationError::Validation { message }
            | OperationError::Server { message, .. }
            | OperationError::Network { message } => message,
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::Validation { message } => {
                write!(f, "validation failed: {message}")
            }
            OperationError::Server { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            OperationError::Network { message } => {
                write!(f, "network failure: {message}")
            }
        }
    }
}

impl std::error::Error for OperationError {}

/// Pull the `message` field out of an error body, if the body is JSON and
/// carries one.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
