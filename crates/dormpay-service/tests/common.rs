//! Common test utilities for dormpay integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use wiremock::MockServer;

use dormpay_service::crypto::hmac_sha256_hex;
use dormpay_service::{create_router, AppState, ServiceConfig, StripeClient, SupabaseClient};

/// Webhook signing secret used by every harness.
pub const WEBHOOK_SECRET: &str = "whsec_test_secret";

/// Test harness wiring the service against mock Stripe and Supabase servers.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Mock standing in for the Stripe API.
    pub stripe: MockServer,
    /// Mock standing in for the Supabase REST API.
    pub supabase: MockServer,
}

impl TestHarness {
    /// Create a harness with both integrations configured.
    pub async fn new() -> Self {
        let stripe = MockServer::start().await;
        let supabase = MockServer::start().await;

        let config = ServiceConfig {
            stripe_secret_key: Some("sk_test_xxx".into()),
            stripe_webhook_secret: Some(WEBHOOK_SECRET.into()),
            supabase_url: Some(supabase.uri()),
            supabase_service_role_key: Some("service-role-key".into()),
            ..ServiceConfig::default()
        };

        let stripe_client = Arc::new(StripeClient::with_base_url("sk_test_xxx", stripe.uri()));
        let supabase_client = Arc::new(SupabaseClient::new(supabase.uri(), "service-role-key"));

        let state = AppState::with_clients(config, Some(stripe_client), Some(supabase_client));
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            stripe,
            supabase,
        }
    }

    /// Sign a webhook payload the way Stripe does, with a fresh timestamp.
    pub fn sign(&self, payload: &str) -> String {
        sign_with_timestamp(payload, chrono::Utc::now().timestamp())
    }
}

/// Bare server with no Stripe or Supabase clients configured.
pub struct BareHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl BareHarness {
    /// Create a server from the default (unconfigured) config.
    pub fn new() -> Self {
        let state = AppState::with_clients(ServiceConfig::default(), None, None);
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server }
    }
}

/// Build a `stripe-signature` header for `payload` at `timestamp`.
pub fn sign_with_timestamp(payload: &str, timestamp: i64) -> String {
    let mut signed = timestamp.to_string().into_bytes();
    signed.push(b'.');
    signed.extend_from_slice(payload.as_bytes());
    let signature = hmac_sha256_hex(WEBHOOK_SECRET, &signed);
    format!("t={timestamp},v1={signature}")
}

/// A `checkout.session.completed` event payload carrying `billing_id` in
/// its session metadata.
pub fn completed_event(billing_id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "evt_test_1",
        "type": "checkout.session.completed",
        "data": {
            "object": {
                "id": "cs_test_1",
                "payment_intent": "pi_test_1",
                "payment_status": "paid",
                "metadata": { "billingId": billing_id }
            }
        }
    })
}
