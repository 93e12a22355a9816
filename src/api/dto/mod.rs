//! Data Transfer Objects for API requests and responses.
//!
//! Request payloads are parsed from raw JSON values by explicit validation
//! functions rather than serde derives: the contract requires unknown fields
//! to be silently ignored, booleans to be rejected where integers are
//! expected, and failures to surface in the `{"error": ...}` shape.

pub mod health;
pub mod user;
