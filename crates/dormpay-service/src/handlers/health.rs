//! Health check handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Whether the Stripe secret key is present in configuration.
    #[serde(rename = "stripeKey")]
    pub stripe_key: String,
}

/// Health check endpoint.
///
/// Reports only local configuration state; never calls the processor or the
/// datastore, so deployment probes stay green during outages of either.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stripe_key = if state.has_stripe() {
        "configured"
    } else {
        "missing"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        stripe_key: stripe_key.to_string(),
    })
}
