//! DormPay Service - payment sessions and webhook reconciliation.
//!
//! This is the main entry point for the dormpay service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dormpay_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dormpay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DormPay Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        app_url = %config.app_url,
        env_mode = ?config.env_mode,
        stripe_key = %configured(config.stripe_secret_key.is_some()),
        webhook_secret = %configured(config.stripe_webhook_secret.is_some()),
        supabase = %configured(config.supabase_url.is_some()),
        "Service configuration loaded"
    );

    // Build app state
    let state = AppState::new(config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn configured(present: bool) -> &'static str {
    if present {
        "configured"
    } else {
        "missing"
    }
}
