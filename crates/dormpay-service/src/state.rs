//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::stripe::StripeClient;
use crate::supabase::SupabaseClient;

/// Application state shared across handlers.
///
/// Built once at startup from [`ServiceConfig`] and read-only afterwards;
/// the only mutable state in the whole flow lives in the external row store.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Stripe client for checkout sessions (optional).
    pub stripe: Option<Arc<StripeClient>>,

    /// Supabase client for billing-row updates (optional).
    pub store: Option<Arc<SupabaseClient>>,
}

impl AppState {
    /// Create application state, constructing clients for each configured
    /// integration.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        let stripe = config.stripe_secret_key.as_ref().map(|key| {
            tracing::info!("Stripe integration enabled");
            Arc::new(StripeClient::new(key))
        });

        if stripe.is_none() {
            tracing::warn!("Stripe not configured - payment sessions will not be available");
        }

        let store = config
            .supabase_url
            .as_ref()
            .zip(config.supabase_service_role_key.as_ref())
            .map(|(url, key)| {
                tracing::info!(supabase_url = %url, "Supabase integration enabled");
                Arc::new(SupabaseClient::new(url, key))
            });

        if store.is_none() {
            tracing::warn!("Supabase not configured - webhook reconciliation will not persist");
        }

        Self {
            config,
            stripe,
            store,
        }
    }

    /// Create application state with pre-built clients (used by tests to
    /// point both integrations at local mock servers).
    #[must_use]
    pub fn with_clients(
        config: ServiceConfig,
        stripe: Option<Arc<StripeClient>>,
        store: Option<Arc<SupabaseClient>>,
    ) -> Self {
        Self {
            config,
            stripe,
            store,
        }
    }

    /// Whether Stripe is configured.
    #[must_use]
    pub fn has_stripe(&self) -> bool {
        self.stripe.is_some()
    }
}
