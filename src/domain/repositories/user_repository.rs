//! Repository trait for user data access.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;
use bson::oid::ObjectId;

/// Repository interface for the `users` collection.
///
/// Every operation maps to a single document-store call; there is no
/// transaction spanning calls, so a lookup followed by a write can race with
/// a concurrent mutation of the same document. That race is an accepted
/// limitation of this API.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoUserRepository`] - MongoDB implementation
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - volatile fallback store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new document. The identifier must already be assigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, user: &User) -> Result<(), AppError>;

    /// Finds a document by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError>;

    /// Lists all documents in store-native order.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Overwrites the stored document carrying the same identifier.
    ///
    /// A document that disappeared between lookup and save makes this a
    /// no-op; concurrent deletes are an accepted race.
    async fn replace(&self, user: &User) -> Result<(), AppError>;

    /// Removes a document by identifier, returning it as it existed
    /// immediately before removal.
    ///
    /// Returns `Ok(None)` when nothing matched, so a repeated delete is an
    /// idempotent no-op.
    async fn delete(&self, id: ObjectId) -> Result<Option<User>, AppError>;

    /// Store connectivity check used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
