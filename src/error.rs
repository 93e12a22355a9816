use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application error surfaced to API callers.
///
/// The CRUD contract has exactly two failure classes. Validation failures are
/// answered with status 200 and an `error` field in the body — only the
/// presence of that key matters to callers. Store failures are unhandled in
/// this scope and surface as 500.
///
/// A lookup miss is deliberately NOT an error: handlers answer it with a
/// `null` body directly and never construct an `AppError` for it.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message } | AppError::Internal { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::OK, message),
            AppError::Internal { message } => {
                tracing::error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::internal(format!("database error: {e}"))
    }
}
