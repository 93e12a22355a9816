//! # Users API
//!
//! A minimal CRUD HTTP service exposing a single `User` resource, built with
//! Axum and backed by MongoDB.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `User` entity and repository trait
//! - **Application Layer** ([`application`]) - The user service orchestrating store calls
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB and in-memory repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and payload validation
//!
//! ## API Contract
//!
//! All five operations live on a single collection endpoint (`/users`) and
//! answer with status 200:
//!
//! - Validation failures return `{"error": "<message>"}`
//! - A lookup miss on PATCH/PUT/DELETE returns a JSON `null` body — it is a
//!   valid "nothing to do" outcome, not an error
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; without it the service runs on a volatile in-memory store
//! export MONGODB_URL="mongodb://localhost:27017"
//! export MONGODB_DATABASE="users"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{NewUser, User, UserPatch};
    pub use crate::domain::repositories::UserRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
