//! Stripe webhook handler.
//!
//! One inbound request walks a fixed sequence: signature gate, verification
//! over the raw bytes, event dispatch, correlation, row update. Nothing in
//! the payload is trusted before verification succeeds.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use dormpay_core::{BillingId, BillingUpdate};

use crate::error::ApiError;
use crate::state::AppState;
use crate::stripe::types::CheckoutSession;
use crate::stripe::{verify_signature, WebhookEvent};

/// Webhook acknowledgement body.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// Whether the webhook was received.
    pub received: bool,
}

/// Handle Stripe webhooks.
///
/// The body arrives as [`Bytes`], never through a parsing extractor: the
/// signature covers the exact bytes Stripe sent. Event types other than
/// `checkout.session.completed` are acknowledged without touching the
/// datastore, so new processor event types never become errors.
pub async fn stripe_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    let secret = state
        .config
        .stripe_webhook_secret
        .as_ref()
        .ok_or(ApiError::MissingSignature)?;

    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::MissingSignature)?;

    verify_signature(secret, &body, signature, Utc::now().timestamp()).map_err(|e| {
        tracing::warn!(error = %e, "Invalid Stripe webhook signature");
        ApiError::InvalidSignature
    })?;

    // Safe to parse now: the payload is authenticated.
    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| ApiError::MalformedEvent(format!("malformed event payload: {e}")))?;

    tracing::info!(
        event_type = %event.event_type,
        event_id = %event.id,
        "Received Stripe webhook"
    );

    match event.event_type.as_str() {
        "checkout.session.completed" => {
            handle_checkout_completed(&state, &event).await?;
        }
        _ => {
            tracing::debug!(event_type = %event.event_type, "Unhandled Stripe event");
        }
    }

    Ok(Json(WebhookResponse { received: true }))
}

/// Reconcile a completed checkout into the `billings` table.
async fn handle_checkout_completed(
    state: &AppState,
    event: &WebhookEvent,
) -> Result<(), ApiError> {
    let session: CheckoutSession = serde_json::from_value(event.data.object.clone())
        .map_err(|e| ApiError::MalformedEvent(format!("malformed checkout session: {e}")))?;

    let billing_id: BillingId = session
        .billing_id()
        .ok_or(ApiError::MissingCorrelation)?
        .into();

    // Payment reference for the billing row; older API versions omit the
    // payment intent on the session, in which case the session id still
    // uniquely identifies the payment.
    let payment_id = session
        .payment_intent
        .clone()
        .unwrap_or_else(|| session.id.clone());

    let store = state
        .store
        .as_ref()
        .ok_or(ApiError::Unavailable("datastore"))?;

    let update = BillingUpdate::paid(payment_id, Utc::now());

    store.update_billing(&billing_id, &update).await.map_err(|e| {
        tracing::error!(error = %e, billing_id = %billing_id, "Failed to update billing row");
        ApiError::persistence(e.to_string(), state.config.is_development())
    })?;

    tracing::info!(
        billing_id = %billing_id,
        event_id = %event.id,
        payment_id = %update.payment_id,
        "Billing marked paid"
    );

    Ok(())
}
