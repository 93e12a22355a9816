//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`User`] - A stored user document
//! - [`Timestamps`] - Creation/update time pair embedded in stored documents
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for mutation
//! input:
//! - `NewUser` - For creating a user (and for PUT's full-replace payload)
//! - `UserPatch` - For partial updates; `None` fields are left unchanged

pub mod timestamps;
pub mod user;

pub use timestamps::Timestamps;
pub use user::{NewUser, User, UserPatch};
