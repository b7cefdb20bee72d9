//! Service configuration.
//!
//! All configuration is read from the environment exactly once at startup
//! and carried as an immutable value inside [`crate::state::AppState`];
//! handlers never read ambient process state.

/// Deployment environment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvMode {
    /// Local development: error details are exposed in responses.
    Development,
    /// Production: error details are suppressed.
    Production,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:3000").
    pub listen_addr: String,

    /// Stripe secret API key (`sk_test_...` / `sk_live_...`).
    pub stripe_secret_key: Option<String>,

    /// Stripe webhook signing secret (`whsec_...`).
    pub stripe_webhook_secret: Option<String>,

    /// Supabase project URL.
    pub supabase_url: Option<String>,

    /// Supabase service-role key for the row update.
    pub supabase_service_role_key: Option<String>,

    /// Front-end base URL for checkout redirects.
    pub app_url: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Deployment environment mode.
    pub env_mode: EnvMode,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let env_mode = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => EnvMode::Production,
            _ => EnvMode::Development,
        };

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY").ok(),
            stripe_webhook_secret: std::env::var("STRIPE_WEBHOOK_SECRET").ok(),
            supabase_url: std::env::var("SUPABASE_URL").ok(),
            supabase_service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8080,http://127.0.0.1:8080".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            env_mode,
        }
    }

    /// Whether error details may be exposed to clients.
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.env_mode == EnvMode::Development
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".into(),
            stripe_secret_key: None,
            stripe_webhook_secret: None,
            supabase_url: None,
            supabase_service_role_key: None,
            app_url: "http://localhost:8080".into(),
            cors_origins: vec![
                "http://localhost:8080".into(),
                "http://127.0.0.1:8080".into(),
            ],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
            env_mode: EnvMode::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origins_match_local_frontend() {
        let config = ServiceConfig::default();
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:8080", "http://127.0.0.1:8080"]
        );
    }

    #[test]
    fn default_mode_is_development() {
        let config = ServiceConfig::default();
        assert!(config.is_development());
    }
}
