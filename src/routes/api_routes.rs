/**
 * API Route Handlers
 *
 * This module defines the `/api` route table.
 *
 * # Authentication
 *
 * Public routes:
 * - `POST /api/users/register`
 * - `POST /api/users/login`
 * - `GET /api/profiles/all`
 * - `GET /api/profiles/users/{user_id}`
 * - `GET /` (welcome, registered by the top-level router)
 *
 * Everything else requires a valid `x-auth-token` header; the token
 * authenticator runs as a route layer in front of those handlers and
 * rejects before any of them (or the database) is reached.
 *
 * `/api/profiles/users/{user_id}` is the one path with mixed access: GET
 * is public, DELETE is authenticated, so the authenticator is layered on
 * the DELETE handler alone.
 */

use axum::handler::Handler;
use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};

use crate::auth::handlers::{get_me, login, register};
use crate::middleware::auth::authenticate;
use crate::posts::handlers as posts;
use crate::profiles::handlers as profiles;
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, cloned into the auth layers
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let auth_layer = middleware::from_fn_with_state(app_state.clone(), authenticate);

    let protected = Router::new()
        // Current user
        .route("/api/users/me", get(get_me))
        // Posts
        .route("/api/posts", post(posts::create_post).get(posts::list_posts))
        .route(
            "/api/posts/{post_id}",
            get(posts::get_post).delete(posts::delete_post),
        )
        .route("/api/posts/like/{post_id}", put(posts::like_post))
        .route("/api/posts/unlike/{post_id}", put(posts::unlike_post))
        // Profiles
        .route(
            "/api/profiles",
            post(profiles::create_profile).put(profiles::update_profile),
        )
        .route("/api/profiles/me", get(profiles::get_my_profile))
        .route("/api/profiles/experience", put(profiles::add_experience))
        .route(
            "/api/profiles/experience/{exp_id}",
            delete(profiles::remove_experience),
        )
        .route("/api/profiles/education", put(profiles::add_education))
        .route(
            "/api/profiles/education/{edu_id}",
            delete(profiles::remove_education),
        )
        .route_layer(auth_layer.clone());

    let public = Router::new()
        // Authentication endpoints
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        // Public profile reads; DELETE on the same path stays authenticated
        .route("/api/profiles/all", get(profiles::list_profiles))
        .route(
            "/api/profiles/users/{user_id}",
            get(profiles::get_profile_by_user)
                .delete(profiles::delete_profile.layer(auth_layer)),
        );

    router.merge(protected).merge(public)
}
