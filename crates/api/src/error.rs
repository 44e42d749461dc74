//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mockbuster_database::DatabaseError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every error is terminal to its request: it maps to a status code and a
/// JSON body, and never aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A store error from the database layer.
    #[error(transparent)]
    Store(#[from] DatabaseError),

    /// A malformed request body on the write endpoint.
    #[error("Invalid request body: {0}")]
    Decode(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Store(DatabaseError::Connection(err)) => {
                tracing::error!(error = %err, "Store unreachable");
                (StatusCode::SERVICE_UNAVAILABLE, "store unavailable".to_string())
            }
            // Query and schema failures stay opaque to the client.
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Store request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            ApiError::Decode(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_maps_to_503() {
        let err = ApiError::Store(DatabaseError::Connection(sqlx::Error::PoolTimedOut));
        assert_eq!(
            err.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn query_error_maps_to_500() {
        let err = ApiError::Store(DatabaseError::Query(sqlx::Error::RowNotFound));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn decode_error_maps_to_400() {
        let err = ApiError::Decode("EOF while parsing".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
