//! Error types for the Stellar Burgers API client.
//!
//! # Design
//! HTTP error statuses are not errors here: every response the service sends
//! back, 4xx and 5xx included, is returned to the caller as an
//! `HttpResponse` for assertion. `ApiError` only covers failures that happen
//! before a response exists (transport, serialization) or while interpreting
//! one on request (deserialization, token parsing).

use thiserror::Error;

/// Errors returned by the endpoint wrappers and response helpers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: DNS, connect, TLS or IO failure.
    #[error("transport failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// An access token did not carry the expected `Bearer` scheme marker.
    #[error("malformed access token: {0}")]
    MalformedToken(String),

    /// A configuration value read from the environment was not understood.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
