//! Infrastructure layer for external integrations.
//!
//! Implements the repository interface defined by the domain layer against
//! MongoDB, plus a volatile in-memory fallback.

pub mod persistence;
