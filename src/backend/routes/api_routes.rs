/**
 * API Route Handlers
 *
 * This module defines route handlers for API endpoints.
 *
 * # Routes
 *
 * ## Users
 * - `POST /api/users` - Register a user
 * - `GET  /api/users/{user_id}` - Fetch a user
 *
 * ## Relationships
 * - `POST /api/users/{user_id}/follow/{target_id}` - Follow a user
 * - `POST /api/users/{user_id}/unfollow/{target_id}` - Unfollow a user
 * - `GET  /api/users/{user_id}/followers` - Page of followers
 * - `GET  /api/users/{user_id}/followings` - Page of followings
 *
 * The list endpoints accept `viewer`, `page`, and `pageSize` query
 * parameters; `viewer` defaults to the subject (self-view).
 */

use axum::Router;

use crate::backend::server::state::AppState;
use crate::backend::social::{
    create_user, follow_user, get_user, list_followers, list_followings, unfollow_user,
};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // User directory endpoints
        .route("/api/users", axum::routing::post(create_user))
        .route("/api/users/{user_id}", axum::routing::get(get_user))
        // Relationship endpoints
        .route(
            "/api/users/{user_id}/follow/{target_id}",
            axum::routing::post(follow_user),
        )
        .route(
            "/api/users/{user_id}/unfollow/{target_id}",
            axum::routing::post(unfollow_user),
        )
        // List endpoints
        .route(
            "/api/users/{user_id}/followers",
            axum::routing::get(list_followers),
        )
        .route(
            "/api/users/{user_id}/followings",
            axum::routing::get(list_followings),
        )
}
