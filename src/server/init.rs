/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: database pool creation, schema migration, state construction
 * and route configuration.
 *
 * Unlike optional integrations, the database is not one: if the pool
 * cannot be created or migrations fail, initialization errors out and the
 * process exits instead of serving requests it cannot handle.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::auth::sessions::SessionKeys;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Errors raised during server initialization
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Create the PostgreSQL connection pool
/// 2. Run pending schema migrations
/// 3. Build `AppState` (pool + session keys from the configured secret)
/// 4. Create the router with all routes and middleware
pub async fn create_app(config: &AppConfig) -> Result<Router, InitError> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    let app_state = AppState::new(pool, SessionKeys::new(&config.jwt_secret));

    Ok(create_router(app_state))
}
