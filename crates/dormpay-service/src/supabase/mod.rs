//! Supabase integration: targeted row updates against the hosted datastore.

pub mod client;
pub mod types;

pub use client::{StoreError, SupabaseClient};
