/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract just the piece
 * they need - most handlers take `State<PgPool>`, the login handler and
 * the authentication middleware additionally take `State<SessionKeys>` -
 * without threading the whole `AppState` through.
 *
 * # Thread Safety
 *
 * Both fields are cheaply cloneable handles: `PgPool` is an `Arc` around
 * the connection pool, `SessionKeys` holds immutable key material.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::SessionKeys;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// JWT signing/verification keys derived from the configured secret
    pub keys: SessionKeys,
}

impl AppState {
    pub fn new(pool: PgPool, keys: SessionKeys) -> Self {
        Self { pool, keys }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.keys.clone()
    }
}
