//! Supabase REST client.
//!
//! The `billings` table is owned by the front end's hosted project; this
//! service holds a service-role key with update access and issues exactly
//! one kind of statement: a field update on a single row, keyed by id.

use std::time::Duration;

use reqwest::Client;

use dormpay_core::{BillingId, BillingUpdate};

use super::types::PostgrestError;

/// Error type for datastore operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The row store rejected the update.
    #[error("store error ({status}): {message}")]
    Api {
        /// HTTP status code of the rejection.
        status: u16,
        /// Store error message.
        message: String,
        /// Store error code, when reported.
        code: Option<String>,
    },
}

/// Supabase REST API client.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseClient {
    /// Create a new Supabase client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    pub fn new(base_url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_role_key: service_role_key.into(),
        }
    }

    /// Apply a payment update to the billing row matching `id`.
    ///
    /// This is a bare field update, not a compare-and-swap: redelivered
    /// events write content-identical fields, so concurrent duplicates are
    /// harmless. A filter matching zero rows is not an error at this layer;
    /// the store answers 204 either way.
    pub async fn update_billing(
        &self,
        id: &BillingId,
        update: &BillingUpdate,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .patch(format!("{}/rest/v1/billings", self.base_url))
            .query(&[("id", format!("eq.{id}"))])
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .header("Prefer", "return=minimal")
            .json(update)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(billing_id = %id, "Billing row updated to paid");
            return Ok(());
        }

        let error_body: Result<PostgrestError, _> = response.json().await;

        match error_body {
            Ok(err) => Err(StoreError::Api {
                status: status.as_u16(),
                message: err.message,
                code: err.code,
            }),
            Err(_) => Err(StoreError::Api {
                status: status.as_u16(),
                message: format!("HTTP {status}"),
                code: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = SupabaseClient::new("https://proj.supabase.co/", "service-role-key");
        assert_eq!(client.base_url, "https://proj.supabase.co");
    }
}
