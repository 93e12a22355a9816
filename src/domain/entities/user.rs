//! User entity stored in the `users` collection.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::timestamps::Timestamps;

/// A stored user document.
///
/// The identifier is generated once at creation and never changes afterwards;
/// client-supplied identifiers in request payloads are ignored upstream and
/// never reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub age: i64,
    pub timestamps: Timestamps,
}

impl User {
    /// Creates a user with a fresh identifier and both timestamps set to now.
    pub fn create(new_user: NewUser) -> Self {
        Self {
            id: ObjectId::new(),
            name: new_user.name,
            age: new_user.age,
            timestamps: Timestamps::stamp(),
        }
    }

    /// Applies the supplied fields of a partial update and refreshes
    /// `updated_at`. Omitted fields are left untouched.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        self.timestamps.touch();
    }

    /// Replaces both mutable fields and refreshes `updated_at`.
    ///
    /// The identifier and `created_at` are kept, so repeating the same
    /// replacement leaves the stored state unchanged apart from `updated_at`.
    pub fn replace_with(&mut self, replacement: NewUser) {
        self.name = replacement.name;
        self.age = replacement.age;
        self.timestamps.touch();
    }
}

/// Input data for creating a user.
///
/// Also serves as the full-replace payload for PUT, which mirrors Create's
/// required-field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged. The identifier is not part of the patch;
/// it can never be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl UserPatch {
    /// Returns true when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
