//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.
//!
//! Body-decoding strategy is fixed per route at wiring time: the webhook
//! route's handler extracts raw [`axum::body::Bytes`], every other route
//! parses JSON. Method routing answers non-POST verbs on the POST-only
//! paths with 405.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{health, payments, webhooks};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// - `GET /health` - Health check (local state only)
/// - `POST /api/create-payment-session` - Create a checkout session
/// - `POST /api/webhook/stripe` - Stripe webhooks (raw body, signature
///   verified)
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;
    let expose_panic_detail = state.config.is_development();

    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/create-payment-session",
            post(payments::create_payment_session),
        )
        .route("/api/webhook/stripe", post(webhooks::stripe_webhook))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .layer(panic_catch_layer(expose_panic_detail))
        .with_state(state)
}

/// Outermost layer: a panic anywhere in the request lifecycle becomes the
/// generic 500 body instead of a dropped connection. The panic message is
/// attached only in development mode.
fn panic_catch_layer(
    expose: bool,
) -> CatchPanicLayer<impl ResponseForPanic<ResponseBody = axum::body::Body> + Clone> {
    CatchPanicLayer::custom(move |err: Box<dyn Any + Send + 'static>| {
        let detail = err
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| err.downcast_ref::<&str>().map(|s| (*s).to_string()))
            .unwrap_or_else(|| "panic".to_string());

        tracing::error!(detail = %detail, "Request handler panicked");

        ApiError::internal(detail, expose).into_response()
    })
}

/// Build the CORS layer from the configured origin allow-list.
///
/// Credentials are enabled, so a wildcard origin is never used; origins
/// that fail to parse as header values are skipped.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use super::*;

    async fn boom() {
        panic!("boom");
    }

    fn panicking_app(expose: bool) -> Router {
        Router::new()
            .route("/boom", get(boom))
            .layer(panic_catch_layer(expose))
    }

    #[tokio::test]
    async fn panicking_handler_returns_generic_500() {
        let server =
            TestServer::new(panicking_app(false)).expect("Failed to create test server");

        let response = server.get("/boom").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Internal server error");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn panic_detail_is_exposed_in_development() {
        let server =
            TestServer::new(panicking_app(true)).expect("Failed to create test server");

        let response = server.get("/boom").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Internal server error");
        assert!(body["error"].as_str().unwrap().contains("boom"));
    }
}
