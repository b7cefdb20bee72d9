//! Supabase (PostgREST) wire shapes.

use serde::Deserialize;

/// PostgREST error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PostgrestError {
    /// Error message.
    pub message: String,
    /// Postgres or PostgREST error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Additional detail.
    #[serde(default)]
    pub details: Option<String>,
    /// Suggested fix.
    #[serde(default)]
    pub hint: Option<String>,
}
