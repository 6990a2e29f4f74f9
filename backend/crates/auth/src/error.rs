//! Auth Error Types
//!
//! Account and credential failures, mapped onto the unified
//! `kernel::error::AppError` for rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::{StoreFailure, classify_sqlx};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenIssueError;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or empty username/password
    #[error("Missing input: {0}")]
    InvalidInput(String),

    #[error("User name already exists")]
    UserNameTaken,

    #[error("User not found")]
    UserNotFound,

    /// Password did not match
    #[error("Invalid password")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Access token missing")]
    MissingCredential,

    /// Bearer token present but rejected
    #[error("Invalid token")]
    InvalidToken,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials
            | AuthError::MissingCredential
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Caller-facing error. Server-side failures get a fixed message; the
    /// store error travels along as `source` for logging only.
    pub fn into_app_error(self) -> AppError {
        let message = self.to_string();
        match self {
            AuthError::InvalidInput(_) => AppError::bad_request(message),
            AuthError::UserNameTaken => AppError::conflict(message)
                .with_action("Choose a different username"),
            AuthError::UserNotFound => AppError::not_found(message),
            AuthError::InvalidCredentials => AppError::unauthorized(message),
            AuthError::MissingCredential | AuthError::InvalidToken => {
                AppError::unauthorized(message)
                    .with_action("Send a valid token as 'Authorization: Bearer <token>'")
            }
            AuthError::StoreUnavailable(e) => {
                AppError::service_unavailable("Service temporarily unavailable")
                    .with_action("Please try again later")
                    .with_source(e)
            }
            AuthError::Database(e) => AppError::internal("Internal server error").with_source(e),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Auth store unavailable");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        match classify_sqlx(&err) {
            StoreFailure::Unavailable => AuthError::StoreUnavailable(err),
            StoreFailure::UniqueViolation | StoreFailure::Other => AuthError::Database(err),
        }
    }
}

impl From<TokenIssueError> for AuthError {
    fn from(err: TokenIssueError) -> Self {
        AuthError::Internal(format!("Token issuance failed: {err}"))
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.into_app_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
