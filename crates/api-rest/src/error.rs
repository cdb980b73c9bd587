//! Mapping of handler failures onto HTTP responses.

use api_shared::ErrorRes;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use labrec_core::RecordError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body did not deserialize into the expected shape; nothing was generated.
    #[error("{}", .0.body_text())]
    Validation(#[from] JsonRejection),

    #[error("{0}")]
    Generation(#[from] RecordError),

    #[error("generation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("invalid response header: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                rejection.status()
            }
            other => {
                tracing::error!("Generate docx error: {:?}", other);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorRes::new(self.to_string()))).into_response()
    }
}
