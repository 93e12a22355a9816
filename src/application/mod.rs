//! Application layer containing service orchestration.
//!
//! Services sit between the API handlers and the repository port, applying
//! entity-level rules (timestamp refresh, identifier assignment) around
//! single document-store calls.

pub mod services;
