//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, list_users_handler, patch_user_handler,
    replace_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes for the users collection endpoint.
///
/// # Endpoints
///
/// - `GET    /users` - List all users
/// - `POST   /users` - Create a user
/// - `PATCH  /users?id=` - Partially update a user
/// - `PUT    /users?id=` - Fully replace a user's fields
/// - `DELETE /users?id=` - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(list_users_handler)
            .post(create_user_handler)
            .patch(patch_user_handler)
            .put(replace_user_handler)
            .delete(delete_user_handler),
    )
}
