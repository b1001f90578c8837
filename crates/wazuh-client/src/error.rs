//! Error types for the wazuh-client library.
//!
//! Every failure is surfaced to the caller as-is: transport errors keep the
//! underlying `reqwest` error as their source, and a malformed authentication
//! response is reported by the field that could not be read.

use thiserror::Error;

/// The unified error type for client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The authentication response could not be read.
    #[error("unexpected response: {0}")]
    Response(#[from] ResponseError),

    /// Credential state errors.
    #[error("credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    /// Input validation errors (base URL, header values, request bodies).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if this error is a missing field in a response body.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Error::Response(ResponseError::MissingField { .. }))
    }

    /// Returns true if this error came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Transport-level errors.
///
/// The original `reqwest::Error` is kept as the source of each variant.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out.
    #[error("request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },

    /// Any other HTTP-level failure.
    #[error("HTTP error: {source}")]
    Http {
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// Returns the underlying `reqwest` error.
    pub fn inner(&self) -> &reqwest::Error {
        match self {
            TransportError::Connection { source }
            | TransportError::Timeout { source }
            | TransportError::Http { source } => source,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { source: err }
        } else if err.is_connect() {
            TransportError::Connection { source: err }
        } else {
            TransportError::Http { source: err }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Errors reading a response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is absent.
    #[error("missing field '{field}'")]
    MissingField { field: &'static str },

    /// A field is present but has the wrong JSON type.
    #[error("field '{field}' is not a {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Credential state errors.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// Credentials were already set and cannot be replaced.
    #[error("cannot modify read-only credentials")]
    Immutable,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// A value cannot be used as an HTTP header.
    #[error("invalid header '{name}': {reason}")]
    Header { name: String, reason: String },

    /// The request body cannot be sent as given.
    #[error("invalid request body: {reason}")]
    Body { reason: String },
}
