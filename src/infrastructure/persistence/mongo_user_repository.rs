//! MongoDB implementation of the user repository.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

const COLLECTION: &str = "users";

/// MongoDB repository for user storage and retrieval.
///
/// Holds a typed collection handle; the driver manages connection pooling
/// behind it.
pub struct MongoUserRepository {
    database: Database,
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Creates a new repository over a database handle.
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: &User) -> Result<(), AppError> {
        self.collection.insert_one(user).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn replace(&self, user: &User) -> Result<(), AppError> {
        // A matched count of zero means the document vanished between lookup
        // and save; concurrent deletes are an accepted race here.
        self.collection
            .replace_one(doc! { "_id": user.id }, user)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        Ok(self
            .collection
            .find_one_and_delete(doc! { "_id": id })
            .await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
