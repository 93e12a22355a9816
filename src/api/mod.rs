//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into domain operations and formats responses
//! according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects and payload validation
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
