//! Stripe API wire shapes.

use serde::Deserialize;

/// Stripe Checkout session object, reduced to the fields this service reads.
///
/// The wire object carries far more (checkout url, payment status, totals);
/// anything not consumed by session creation or webhook reconciliation is
/// left to serde's unknown-field handling.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Session ID (`cs_...`).
    pub id: String,
    /// Payment intent ID (`pi_...`), present once a payment is attached.
    #[serde(default)]
    pub payment_intent: Option<String>,
    /// Metadata attached at session creation (carries `billingId`).
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl CheckoutSession {
    /// Correlation metadata: the billing id attached at session creation.
    #[must_use]
    pub fn billing_id(&self) -> Option<&str> {
        self.metadata.get("billingId").and_then(|v| v.as_str())
    }
}

/// Stripe webhook event envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    /// Event ID (`evt_...`).
    pub id: String,
    /// Event type (e.g. "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event data.
    pub data: WebhookEventData,
}

/// Webhook event data container.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEventData {
    /// The event object; a [`CheckoutSession`] for checkout events.
    pub object: serde_json::Value,
}

/// Inputs for creating a checkout session.
///
/// Everything here is already validated and converted; the client only
/// translates it into Stripe's form-encoded parameter set.
#[derive(Debug, Clone)]
pub struct CheckoutParams {
    /// Price in satang (THB minor unit).
    pub unit_amount: i64,
    /// Line-item description shown on the checkout page.
    pub description: String,
    /// Billing id carried as correlation metadata.
    pub billing_id: String,
    /// Redirect after successful payment.
    pub success_url: String,
    /// Redirect after cancelled payment.
    pub cancel_url: String,
}

/// Stripe API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message.
    pub message: String,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
}
