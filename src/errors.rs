//! Crate-wide error type.
//!
//! Storage errors pass through unchanged except for constraint violations,
//! which become the variants callers branch on (`Conflict`, `UnknownUser`).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Login name and password do not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated but not an admin
    #[error("Access denied")]
    Forbidden,

    #[error("Resource not found")]
    NotFound,

    /// A score referenced a user primary key that does not exist
    #[error("No user with primary key {0}")]
    UnknownUser(i32),

    /// Unique constraint hit; holds a description of the duplicate
    #[error("{0} already exists")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    /// Submission result map lacks a required key
    #[error("Missing key `{0}` in submission result")]
    MissingField(String),

    #[error("Database error")]
    Database(#[from] DbErr),

    #[error("Internal server error")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        Self::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_field(key: impl Into<String>) -> Self {
        Self::MissingField(key.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Map a storage error, reporting a unique violation as a conflict on
    /// `entity`.
    pub fn from_db(err: DbErr, entity: impl Into<String>) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return Self::Conflict(entity.into());
        }
        Self::Database(err)
    }

    /// Machine-readable code, also used as the CLI exit log field.
    pub fn code(&self) -> &'static str {
        self.classify().1
    }

    pub fn status(&self) -> StatusCode {
        self.classify().0
    }

    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            Self::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            Self::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::UnknownUser(_) => (StatusCode::NOT_FOUND, "UNKNOWN_USER"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Client-safe message. Server-side details are logged, not returned.
    fn public_message(&self) -> String {
        match self {
            Self::Database(e) => {
                tracing::error!(error = ?e, "Database error");
                "A database error occurred".to_string()
            }
            Self::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();
        let body = json!({
            "error": {
                "code": code,
                "message": self.public_message(),
            }
        });
        (status, Json(body)).into_response()
    }
}

/// `Option` to [`AppError::NotFound`].
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(AppError::UnknownUser(7).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::UnknownUser(7).code(), "UNKNOWN_USER");
        assert_eq!(AppError::conflict("User").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::missing_field("ndcg").code(), "MISSING_FIELD");
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::conflict("User 'alice'").to_string(), "User 'alice' already exists");
        assert_eq!(
            AppError::missing_field("f1").to_string(),
            "Missing key `f1` in submission result"
        );
    }

    #[test]
    fn test_internal_detail_not_public() {
        let err = AppError::internal("connection string leaked");
        assert_eq!(err.public_message(), "An internal error occurred");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_db_keeps_other_errors() {
        let err = AppError::from_db(DbErr::Custom("boom".to_string()), "User");
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_ok_or_not_found() {
        assert!(matches!(None::<i32>.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }
}
