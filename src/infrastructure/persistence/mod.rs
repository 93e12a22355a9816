//! Repository implementations.
//!
//! - [`MongoUserRepository`] - MongoDB-backed storage
//! - [`InMemoryUserRepository`] - volatile store used when no MongoDB is
//!   configured and by handler tests

pub mod memory_user_repository;
pub mod mongo_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
pub use mongo_user_repository::MongoUserRepository;
