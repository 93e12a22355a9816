//! In-memory implementation of the user repository.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Volatile user store backed by a `Vec`.
///
/// Used when no MongoDB instance is configured (all data is lost on restart)
/// and by handler tests that need a real store without a running database.
/// Documents keep insertion order, matching the driver's natural find order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, AppError> {
        self.users
            .lock()
            .map_err(|_| AppError::internal("user store mutex poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), AppError> {
        self.lock()?.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.lock()?.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.lock()?.clone())
    }

    async fn replace(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.lock()?;
        if let Some(stored) = users.iter_mut().find(|u| u.id == user.id) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        let mut users = self.lock()?;
        let position = users.iter().position(|u| u.id == id);
        Ok(position.map(|index| users.remove(index)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
