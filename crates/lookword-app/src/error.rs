use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lookword_core::FormatError;
use lookword_source::FetchError;
use serde_json::json;

/// Errors surfaced to HTTP clients as `{"error": message}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing query parameter 'w'")]
    MissingQuery,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Nothing has been saved yet")]
    NothingSaved,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery | ApiError::InvalidBody(_) | ApiError::Format(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Fetch(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ApiError::NothingSaved => StatusCode::NOT_FOUND,
            ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        } else {
            tracing::debug!("Request rejected: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
