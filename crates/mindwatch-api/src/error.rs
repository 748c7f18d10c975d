//! HTTP error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use mindwatch_fusion::InferenceError;

use crate::protocol::ErrorBody;

/// Error returned by request handlers.
///
/// Every variant renders as `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client error, e.g. no modality present or consent missing. 400.
    #[error("{0}")]
    BadRequest(String),

    /// Body is not a valid inference request. 422.
    #[error("{0}")]
    Unprocessable(String),

    /// Body could not be read, e.g. over the size limit.
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    /// Inference failed. 500.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            internal @ InferenceError::Internal(_) => ApiError::Internal(internal.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(r) => ApiError::Rejected {
                status: r.status(),
                detail: r.body_text(),
            },
            other => ApiError::Unprocessable(other.body_text()),
        }
    }
}
