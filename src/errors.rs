//! Failure classification and the wire-stable error envelope.
//!
//! Every failed request, whatever the cause, is answered with the same JSON
//! shape:
//!
//! ```json
//! { "error": true, "status": 400, "message": "...", "type": "ValidationError" }
//! ```
//!
//! Contract violations map to 400/`ValidationError`; everything else that
//! reaches the service boundary (upstream transport failures, upstream
//! non-success statuses, internal faults) maps to 500/`ServerError`.

use crate::validator::ValidationFailure;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const FALLBACK_MESSAGE: &str = "Internal server error";

/// Terminal failure of a gateway request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request violated the contract.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The upstream call failed in transport or returned a non-success
    /// status.
    #[error("{0}")]
    Upstream(String),

    /// A fault inside the gateway itself.
    #[error("{0}")]
    Internal(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}

/// JSON error body returned for every failed request.
///
/// Field names and order are part of the wire contract; `kind` serializes
/// as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: bool,
    pub status: u16,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorEnvelope {
    /// Envelope for a contract violation (HTTP 400).
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        ErrorEnvelope {
            error: true,
            status: 400,
            message: message.into(),
            kind: "ValidationError".to_string(),
        }
    }

    /// Envelope for any server-side failure (HTTP 500). An empty cause
    /// message falls back to a generic one.
    #[must_use]
    pub fn server(message: impl Into<String>) -> Self {
        let message = message.into();
        ErrorEnvelope {
            error: true,
            status: 500,
            message: if message.is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
            kind: "ServerError".to_string(),
        }
    }

    /// Translate a [`GatewayError`] into the response status and body.
    /// Translation never fails.
    #[must_use]
    pub fn from_gateway_error(err: &GatewayError) -> (StatusCode, ErrorEnvelope) {
        match err {
            GatewayError::Validation(failure) => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::validation(failure.to_string()),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorEnvelope::server(other.to_string()),
            ),
        }
    }

    /// Serialize to the JSON wire form.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"error":true,"status":500,"message":"{FALLBACK_MESSAGE}","type":"ServerError"}}"#
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_translation() {
        let err = GatewayError::from(ValidationFailure::MissingBody);
        let (status, envelope) = ErrorEnvelope::from_gateway_error(&err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.kind, "ValidationError");
        assert_eq!(envelope.message, "Request body is required but missing");
    }

    #[test]
    fn test_empty_server_message_falls_back() {
        let envelope = ErrorEnvelope::server("");
        assert_eq!(envelope.message, "Internal server error");
    }

    #[test]
    fn test_wire_field_names() {
        let json = ErrorEnvelope::validation("nope").to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], true);
        assert_eq!(value["status"], 400);
        assert_eq!(value["type"], "ValidationError");
        assert!(value.get("kind").is_none());
    }
}
