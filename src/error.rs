//! Error types for the API client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error code attached by the server.
///
/// The set of codes is owned by the server; the client carries them as
/// opaque tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub String);

impl ErrorCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extensions block of one GraphQL error entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorExtensions {
    /// Machine-readable error code, when attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

/// One GraphQL error entry as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Extensions metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ApiErrorExtensions>,
}

impl ApiError {
    /// Error code, when the server attached one.
    #[must_use]
    pub fn code(&self) -> Option<&ErrorCode> {
        self.extensions.as_ref().and_then(|ext| ext.code.as_ref())
    }
}

/// Raw `{data, errors}` body as received from the transport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPayload {
    /// Response data, untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// GraphQL error list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
}

/// HTTP error information captured from reqwest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorInfo {
    /// Error message.
    pub message: String,
    /// HTTP status code (if available).
    pub status_code: Option<u16>,
    /// Whether the error was a timeout.
    pub is_timeout: bool,
    /// Whether the error was a connection failure.
    pub is_connect: bool,
}

impl From<reqwest::Error> for HttpErrorInfo {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            status_code: err.status().map(|status| status.as_u16()),
            is_timeout: err.is_timeout(),
            is_connect: err.is_connect(),
        }
    }
}

/// Error type for client operations.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// HTTP/network error.
    #[error("HTTP error: {0:?}")]
    Http(HttpErrorInfo),

    /// Non-success HTTP response status.
    #[error("HTTP status {status} with body: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: StatusCode,
        /// Response body (truncated if needed).
        body: String,
    },

    /// JSON encode/decode error.
    #[error("JSON error: {0}")]
    Json(String),

    /// GraphQL-level errors returned by the API.
    #[error("API error: {message}")]
    Api {
        /// Message of the first error entry.
        message: String,
        /// Raw `{data, errors}` payload as received.
        raw: Option<RawPayload>,
    },

    /// Response did not match the GraphQL over HTTP contract.
    #[error("protocol error: {message}")]
    Protocol {
        /// Details.
        message: String,
    },

    /// A field descriptor was not a string.
    #[error("invalid field type \"{actual}\", needs to be string")]
    InvalidFieldType {
        /// JSON type of the offending element.
        actual: &'static str,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(HttpErrorInfo::from(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl ClientError {
    /// Raw payload attached to an API-level error, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&RawPayload> {
        match self {
            Self::Api { raw, .. } => raw.as_ref(),
            _ => None,
        }
    }

    /// Build an API-level error from a non-empty error list and the data
    /// that accompanied it.
    pub(crate) fn from_errors(errors: Vec<ApiError>, data: Option<serde_json::Value>) -> Self {
        let message = errors
            .first()
            .and_then(|err| err.message.clone())
            .unwrap_or_else(|| "GraphQL error".to_string());
        Self::Api {
            message,
            raw: Some(RawPayload { data, errors }),
        }
    }
}
