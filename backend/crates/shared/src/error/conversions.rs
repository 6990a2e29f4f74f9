//! Error conversions
//!
//! Store-failure classification and the HTTP rendering of [`AppError`].

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// SQLx classification (feature-gated)
// ============================================================================

/// Coarse classification of a store failure.
///
/// Domain crates use this to decide between a domain outcome (duplicate
/// key), "store unavailable", and an opaque server failure.
#[cfg(feature = "sqlx")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFailure {
    /// A unique constraint rejected the write
    UniqueViolation,
    /// The store could not be reached or the pool is exhausted
    Unavailable,
    /// Anything else; detail goes to logs only
    Other,
}

#[cfg(feature = "sqlx")]
pub fn classify_sqlx(err: &sqlx::Error) -> StoreFailure {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreFailure::UniqueViolation
        }
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 53 (insufficient resources), Class 57 (operator intervention)
            Some("53000" | "53100" | "53200" | "53300")
            | Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => StoreFailure::Unavailable,
            _ => StoreFailure::Other,
        },
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::WorkerCrashed => StoreFailure::Unavailable,
        _ => StoreFailure::Other,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details; `source` is never rendered
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_pool_failures_are_unavailable() {
        use super::{StoreFailure, classify_sqlx};

        assert_eq!(
            classify_sqlx(&sqlx::Error::PoolTimedOut),
            StoreFailure::Unavailable
        );
        assert_eq!(
            classify_sqlx(&sqlx::Error::PoolClosed),
            StoreFailure::Unavailable
        );
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_is_other() {
        use super::{StoreFailure, classify_sqlx};

        assert_eq!(
            classify_sqlx(&sqlx::Error::RowNotFound),
            StoreFailure::Other
        );
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_problem_details_hide_source() {
        use super::AppError;
        use axum::body::to_bytes;
        use axum::response::IntoResponse;

        let err = AppError::internal("Internal server error")
            .with_source(std::io::Error::other("relation profiles does not exist"));
        let response = err.into_response();
        assert_eq!(response.status(), 500);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 500);
        assert_eq!(body["detail"], "Internal server error");
        assert!(!body.to_string().contains("relation"));
    }
}
