//! Profile Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::{StoreFailure, classify_sqlx};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// The caller owns no profile
    #[error("Profile not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::NotFound => ErrorKind::NotFound,
            ProfileError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Caller-facing error; store failures are attached as `source` only.
    pub fn into_app_error(self) -> AppError {
        match self {
            ProfileError::NotFound => AppError::not_found(self.to_string())
                .with_action("Create a profile with POST /profiles first"),
            ProfileError::StoreUnavailable(e) => {
                AppError::service_unavailable("Service temporarily unavailable")
                    .with_action("Please try again later")
                    .with_source(e)
            }
            ProfileError::Database(e) => AppError::internal("Internal server error").with_source(e),
            ProfileError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profile database error");
            }
            ProfileError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Profile store unavailable");
            }
            ProfileError::Internal(msg) => {
                tracing::error!(message = %msg, "Profile internal error");
            }
            ProfileError::NotFound => {
                tracing::debug!("Profile not found");
            }
        }
    }
}

impl From<sqlx::Error> for ProfileError {
    fn from(err: sqlx::Error) -> Self {
        match classify_sqlx(&err) {
            StoreFailure::Unavailable => ProfileError::StoreUnavailable(err),
            StoreFailure::UniqueViolation | StoreFailure::Other => ProfileError::Database(err),
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        err.into_app_error()
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ProfileError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ProfileError::from(sqlx::Error::PoolClosed).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ProfileError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_detail_not_exposed() {
        use std::error::Error as _;

        let err = ProfileError::Database(sqlx::Error::Protocol("column owner_id".into()));
        let app = err.into_app_error();
        assert_eq!(app.message(), "Internal server error");
        assert!(!app.to_string().contains("owner_id"));
        assert!(app.source().is_some_and(|e| e.to_string().contains("owner_id")));
    }
}
