//! Error types for the todo API client.
//!
//! `NotFound` and `Validation` get dedicated variants because callers
//! distinguish "the resource does not exist" and "the server rejected the
//! input" from an unexpected status. Everything else non-2xx lands in
//! `HttpError` with the raw status and body. `Transport` covers requests that
//! never produced a response.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and by `Transport`s.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 422 with an `errors` list.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The server returned some other non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response arrived: connection refused, reset, DNS failure.
    #[error("transport failed: {0}")]
    Transport(String),
}
