//! DTOs and payload validation for the users endpoint.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;

/// Why a request payload was rejected.
///
/// Callers only rely on the presence of an `error` key in the response; the
/// messages are informational.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `name` must be a string")]
    NameNotAString,
    #[error("field `age` must be an integer")]
    AgeNotAnInteger,
    #[error("at least one of `name` or `age` must be provided")]
    EmptyPatch,
}

impl From<PayloadError> for AppError {
    fn from(e: PayloadError) -> Self {
        AppError::validation(e.to_string())
    }
}

/// Parses the create payload (also PUT's full-replace payload): both fields
/// required.
///
/// Unknown fields — including any client-supplied `id` or `_id` — are
/// silently ignored; the store always assigns its own identifier.
pub fn parse_new_user(body: &Value) -> Result<NewUser, PayloadError> {
    let object = body.as_object().ok_or(PayloadError::NotAnObject)?;

    let name = match object.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err(PayloadError::NameNotAString),
        None => return Err(PayloadError::MissingField("name")),
    };

    let age = parse_age(object.get("age").ok_or(PayloadError::MissingField("age"))?)?;

    Ok(NewUser { name, age })
}

/// Parses the partial-update payload: each field optional, but supplying
/// neither is a validation error.
pub fn parse_user_patch(body: &Value) -> Result<UserPatch, PayloadError> {
    let object = body.as_object().ok_or(PayloadError::NotAnObject)?;

    let name = match object.get("name") {
        Some(Value::String(name)) => Some(name.clone()),
        Some(_) => return Err(PayloadError::NameNotAString),
        None => None,
    };

    let age = object.get("age").map(parse_age).transpose()?;

    let patch = UserPatch { name, age };
    if patch.is_empty() {
        return Err(PayloadError::EmptyPatch);
    }
    Ok(patch)
}

/// A boolean is never a valid age, and fractional numbers are rejected.
fn parse_age(value: &Value) -> Result<i64, PayloadError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or(PayloadError::AgeNotAnInteger),
        _ => Err(PayloadError::AgeNotAnInteger),
    }
}

/// Query parameters identifying the target document for PATCH/PUT/DELETE.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub id: String,
}

impl UserIdQuery {
    /// Parses the identifier string.
    ///
    /// A malformed identifier is a validation error, distinct from the
    /// `null` body answered for a well-formed identifier that matches
    /// nothing.
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.id)
            .map_err(|_| AppError::validation(format!("invalid user id `{}`", self.id)))
    }
}

/// JSON representation of a user document.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            age: user.age,
            created_at: user.timestamps.created_at.to_chrono(),
            updated_at: user.timestamps.updated_at.to_chrono(),
        }
    }
}
