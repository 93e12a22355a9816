//! User CRUD orchestration service.

use std::sync::Arc;

use bson::oid::ObjectId;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for the five user operations.
///
/// Each method performs at most one read and at most one write against the
/// store. PATCH and PUT are lookup-then-save as two sequential calls done by
/// the handler: the handler fetches the document via [`UserService::find`],
/// then hands it back to [`UserService::apply_patch`] or
/// [`UserService::replace`]. Nothing wraps the pair in a transaction.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service over a repository implementation.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists every user document in store-native order.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }

    /// Creates a user document.
    ///
    /// Assigns a fresh identifier and stamps both timestamps to the same
    /// instant before inserting, then returns the stored document.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User::create(new_user);
        self.repository.insert(&user).await?;
        Ok(user)
    }

    /// Finds a user by identifier. `Ok(None)` is a valid lookup miss.
    pub async fn find(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Applies a partial update to an already-fetched user and persists it.
    ///
    /// Only the fields present in the patch change; `updated_at` is
    /// refreshed, `created_at` and the identifier are kept.
    pub async fn apply_patch(&self, mut user: User, patch: UserPatch) -> Result<User, AppError> {
        user.apply_patch(patch);
        self.repository.replace(&user).await?;
        Ok(user)
    }

    /// Replaces both mutable fields of an already-fetched user and persists it.
    ///
    /// Idempotent: repeating the same replacement leaves the stored state
    /// unchanged apart from `updated_at`.
    pub async fn replace(&self, mut user: User, replacement: NewUser) -> Result<User, AppError> {
        user.replace_with(replacement);
        self.repository.replace(&user).await?;
        Ok(user)
    }

    /// Deletes a user by identifier, returning the pre-deletion snapshot.
    ///
    /// `Ok(None)` when nothing matched; repeating the call is a no-op.
    pub async fn delete(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        self.repository.delete(id).await
    }

    /// Returns whether the backing store answers a ping.
    pub async fn health_check(&self) -> bool {
        self.repository.ping().await.is_ok()
    }
}
