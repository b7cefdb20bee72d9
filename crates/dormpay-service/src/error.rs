//! API error types and responses.
//!
//! Every failure is converted to a JSON body at the endpoint boundary.
//! Response bodies follow the front-end contract: `{message}` with an
//! optional `error` field carrying detail. Whether detail is attached is
//! decided where the error is constructed (the handler has the config in
//! scope); `IntoResponse` never consults ambient state.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - missing or invalid request fields.
    #[error("{0}")]
    Validation(String),

    /// Webhook request without a signature header, or no secret configured.
    #[error("Missing signature or endpoint secret")]
    MissingSignature,

    /// Webhook signature did not verify against the shared secret.
    #[error("invalid webhook signature")]
    InvalidSignature,

    /// Verified event carries no billing id in its session metadata.
    #[error("missing billing id in session metadata")]
    MissingCorrelation,

    /// Signature-verified payload could not be parsed as a webhook event.
    #[error("{0}")]
    MalformedEvent(String),

    /// The payment processor rejected the request.
    #[error("processor error: {status}")]
    Processor {
        /// HTTP status reported by the processor.
        status: u16,
        /// Processor message, present only when detail may be exposed.
        detail: Option<String>,
    },

    /// The datastore update failed.
    #[error("persistence error")]
    Persistence {
        /// Store message, present only when detail may be exposed.
        detail: Option<String>,
    },

    /// A required integration is not configured.
    #[error("{0} is not configured")]
    Unavailable(&'static str),

    /// Internal server error.
    #[error("internal error")]
    Internal {
        /// Detail, present only when it may be exposed.
        detail: Option<String>,
    },
}

impl ApiError {
    /// Processor rejection, exposing the processor's message in development.
    #[must_use]
    pub fn processor(status: Option<u16>, message: String, expose: bool) -> Self {
        Self::Processor {
            status: status.unwrap_or(500),
            detail: expose.then_some(message),
        }
    }

    /// Datastore update failure, exposing the store message in development.
    #[must_use]
    pub fn persistence(message: String, expose: bool) -> Self {
        Self::Persistence {
            detail: expose.then_some(message),
        }
    }

    /// Unhandled internal failure, exposing detail in development.
    #[must_use]
    pub fn internal(message: String, expose: bool) -> Self {
        Self::Internal {
            detail: expose.then_some(message),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Self::MissingSignature => (
                StatusCode::BAD_REQUEST,
                "Missing signature or endpoint secret".to_string(),
                None,
            ),
            Self::InvalidSignature => (
                StatusCode::BAD_REQUEST,
                "Webhook error".to_string(),
                Some("invalid webhook signature".to_string()),
            ),
            Self::MissingCorrelation => (
                StatusCode::BAD_REQUEST,
                "Webhook error".to_string(),
                Some("missing billing id in session metadata".to_string()),
            ),
            Self::MalformedEvent(detail) => (
                StatusCode::BAD_REQUEST,
                "Webhook error".to_string(),
                Some(detail),
            ),
            Self::Processor { status, detail } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                detail.unwrap_or_else(|| "Error creating payment session".to_string()),
                None,
            ),
            Self::Persistence { detail } => {
                tracing::error!(detail = ?detail, "Datastore update failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Webhook error".to_string(),
                    detail,
                )
            }
            Self::Unavailable(what) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("{what} is not configured"),
                None,
            ),
            Self::Internal { detail } => {
                tracing::error!(detail = ?detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    detail,
                )
            }
        };

        let body = ErrorResponse { message, error };

        (status, Json(body)).into_response()
    }
}
