//! Maps [`coach_engine::EngineError`] to HTTP status codes and `{code,
//! message}` bodies (§4.6, §7).

use crate::types::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use coach_engine::EngineError;

pub struct HttpError(EngineError);

impl From<EngineError> for HttpError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            EngineError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            EngineError::NoAvailability => (StatusCode::CONFLICT, "NO_AVAILABILITY"),
            EngineError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            EngineError::AlreadyCancelled => (StatusCode::CONFLICT, "ALREADY_CANCELLED"),
            EngineError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        let body = ErrorBody {
            code,
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn status_and_code(err: EngineError) -> (StatusCode, String) {
        let response = HttpError::from(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body.code.to_string())
    }

    #[tokio::test]
    async fn validation_error_maps_to_400() {
        let (status, code) = status_and_code(EngineError::Validation("bad".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn no_availability_maps_to_409() {
        let (status, code) = status_and_code(EngineError::NoAvailability).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "NO_AVAILABILITY");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, code) = status_and_code(EngineError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn already_cancelled_maps_to_409() {
        let (status, code) = status_and_code(EngineError::AlreadyCancelled).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "ALREADY_CANCELLED");
    }

    #[tokio::test]
    async fn internal_error_maps_to_500() {
        let (status, code) = status_and_code(EngineError::Internal("broken".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }
}
