//! DormPay HTTP API service.
//!
//! This crate provides the payment backend for the dormitory-management web
//! app:
//!
//! - Checkout-session creation against the Stripe API
//! - Signed webhook reconciliation of completed payments into the hosted
//!   `billings` table
//! - Health check for deployment probes
//!
//! # Request bodies
//!
//! The webhook route is the only one that reads the raw request body; the
//! signature is computed over the exact bytes Stripe sent, so that route
//! must never go through a parsing extractor. Every other route uses
//! structured JSON extraction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers stay async for signature consistency

pub mod config;
pub mod crypto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod stripe;
pub mod supabase;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
pub use stripe::{StripeClient, StripeError};
pub use supabase::{StoreError, SupabaseClient};
