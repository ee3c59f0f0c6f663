use std::sync::Arc;

use crate::auth::TokenVerifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, handed to the repositories on every call.
    pub pool: casting_db::DbPool,
    /// Bearer-token verifier and signing-key cache.
    pub verifier: Arc<TokenVerifier>,
}
