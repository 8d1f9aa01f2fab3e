/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * The router carries two HTTP-level layers:
 * - permissive CORS, so browser clients on other origins can call the API
 * - request tracing, one span per request
 *
 * Unknown routes fall through to a plain 404 handler.
 */

use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, session keys)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new().route("/", get(welcome));

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Plain welcome page at the root
async fn welcome() -> Html<&'static str> {
    Html("<h2>Welcome to the DevConnect backend</h2>")
}
