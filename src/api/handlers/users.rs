//! Handlers for the users collection endpoint.
//!
//! All five operations answer with status 200. Validation failures carry an
//! `{"error": "<message>"}` body (see [`crate::error::AppError`]); a lookup
//! miss on PATCH/PUT/DELETE answers with a JSON `null` body — a valid
//! "nothing to do" outcome, never an error and never a 404.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;

use crate::api::dto::user::{UserIdQuery, UserResponse, parse_new_user, parse_user_patch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every user document in store-native order.
///
/// # Endpoint
///
/// `GET /users`
///
/// Always succeeds; an empty collection yields `[]`.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Creates a user from a `{name, age}` payload.
///
/// # Endpoint
///
/// `POST /users`
///
/// `name` must be a string and `age` an integer; a boolean in place of `age`
/// is rejected. Unknown fields and client-supplied identifiers are ignored.
/// On validation failure nothing is persisted.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<UserResponse>, AppError> {
    let new_user = parse_new_user(&body)?;
    let user = state.users.create(new_user).await?;
    Ok(Json(user.into()))
}

/// Partially updates the user named by the `id` query parameter.
///
/// # Endpoint
///
/// `PATCH /users?id=<hex>`
///
/// The lookup happens before payload validation, so an unknown identifier
/// answers `null` even when the payload is invalid. Against an existing
/// document the payload must supply at least one of `name`/`age`; omitted
/// fields are untouched and `updated_at` is refreshed.
pub async fn patch_user_handler(
    Query(query): Query<UserIdQuery>,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Option<UserResponse>>, AppError> {
    let id = query.object_id()?;

    let Some(user) = state.users.find(id).await? else {
        return Ok(Json(None));
    };

    let patch = parse_user_patch(&body)?;
    let updated = state.users.apply_patch(user, patch).await?;
    Ok(Json(Some(updated.into())))
}

/// Fully replaces the user named by the `id` query parameter.
///
/// # Endpoint
///
/// `PUT /users?id=<hex>`
///
/// Full-replace semantics: the payload must supply BOTH `name` and `age`,
/// mirroring Create's rules (including the boolean-age rejection). Unknown
/// identifiers answer `null`. Repeating the same PUT produces the same
/// stored state.
pub async fn replace_user_handler(
    Query(query): Query<UserIdQuery>,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Option<UserResponse>>, AppError> {
    let id = query.object_id()?;

    let Some(user) = state.users.find(id).await? else {
        return Ok(Json(None));
    };

    let replacement = parse_new_user(&body)?;
    let updated = state.users.replace(user, replacement).await?;
    Ok(Json(Some(updated.into())))
}

/// Deletes the user named by the `id` query parameter.
///
/// # Endpoint
///
/// `DELETE /users?id=<hex>`
///
/// Returns the document as it existed immediately before removal, or `null`
/// when the identifier matches nothing. A second delete of the same
/// identifier is an idempotent no-op answering `null`.
pub async fn delete_user_handler(
    Query(query): Query<UserIdQuery>,
    State(state): State<AppState>,
) -> Result<Json<Option<UserResponse>>, AppError> {
    let id = query.object_id()?;
    let deleted = state.users.delete(id).await?;
    Ok(Json(deleted.map(UserResponse::from)))
}
