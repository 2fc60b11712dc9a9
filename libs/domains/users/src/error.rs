use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::InvalidId(id) => AppError::BadRequest(format!("invalid id: {}", id)),
            UserError::NotFound(_) => {
                AppError::NotFound(ErrorCode::NotFound.default_message().to_string())
            }
            UserError::Database(msg) => AppError::Database(msg),
            UserError::PasswordHash(msg) => AppError::InternalServerError(msg),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        if let UserError::NotFound(ref id) = self {
            tracing::debug!(user_id = %id, "User lookup missed");
        }
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for UserError {
    fn from(err: bcrypt::BcryptError) -> Self {
        UserError::PasswordHash(err.to_string())
    }
}
