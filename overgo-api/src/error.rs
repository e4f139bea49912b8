use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use overgo_catalog::ProviderError;
use overgo_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    UnknownProvider(String),
    ProviderUnavailable(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UnknownProvider(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ProviderUnavailable(msg) => {
                tracing::error!("Provider failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            },
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::InternalError(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UnknownProvider(_) => AppError::UnknownProvider(err.to_string()),
            ProviderError::Unavailable { .. } => AppError::ProviderUnavailable(err.to_string()),
        }
    }
}
