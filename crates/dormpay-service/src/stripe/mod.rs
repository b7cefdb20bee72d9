//! Stripe integration: checkout-session client and webhook verification.

pub mod client;
pub mod types;
pub mod webhook;

pub use client::{StripeClient, StripeError};
pub use types::{CheckoutParams, CheckoutSession, WebhookEvent};
pub use webhook::{verify_signature, SignatureError, SIGNATURE_TOLERANCE_SECONDS};
