//! Payment session handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use dormpay_core::{to_minor_units, BillingId};

use crate::error::ApiError;
use crate::state::AppState;
use crate::stripe::CheckoutParams;

/// Fallback line-item description when the request carries none.
const DEFAULT_DESCRIPTION: &str = "Room rental payment";

/// Request body for creating a payment session.
///
/// Both required fields are optional at the serde level so a missing field
/// produces the contract's 400 response instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    /// Rent amount in baht.
    pub amount: Option<f64>,
    /// Billing row this payment is for.
    #[serde(rename = "billingId")]
    pub billing_id: Option<BillingId>,
    /// Optional description shown on the checkout page.
    pub description: Option<String>,
}

/// Response carrying the opaque checkout-session id.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Stripe checkout-session id.
    pub id: String,
}

/// Create a hosted checkout session for a rent billing.
///
/// Validation runs before anything else; the processor is never called for
/// a request missing `amount` or `billingId`. The session carries the
/// billing id as metadata so the completion webhook can find its row, and
/// redirects the tenant back to the billing screen either way.
pub async fn create_payment_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let amount = request.amount.filter(|a| a.is_finite() && *a > 0.0);

    let (amount, billing_id): (f64, BillingId) = match (amount, request.billing_id) {
        (Some(amount), Some(billing_id)) => (amount, billing_id),
        _ => return Err(ApiError::Validation("Missing required fields".to_string())),
    };

    let stripe = state
        .stripe
        .as_ref()
        .ok_or(ApiError::Unavailable("payment processor"))?;

    let params = CheckoutParams {
        unit_amount: to_minor_units(amount),
        description: request
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        billing_id: billing_id.to_string(),
        success_url: format!(
            "{}/billing?success=true&billing_id={billing_id}",
            state.config.app_url
        ),
        cancel_url: format!("{}/billing?canceled=true", state.config.app_url),
    };

    tracing::info!(
        billing_id = %billing_id,
        amount = %amount,
        unit_amount = %params.unit_amount,
        "Creating payment session"
    );

    let session = stripe.create_checkout_session(&params).await.map_err(|e| {
        tracing::error!(error = %e, billing_id = %billing_id, "Failed to create payment session");
        ApiError::processor(e.status(), e.to_string(), state.config.is_development())
    })?;

    tracing::info!(session_id = %session.id, billing_id = %billing_id, "Payment session created");

    Ok(Json(SessionResponse { id: session.id }))
}
