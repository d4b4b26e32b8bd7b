use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parley_mt::TranslationSource;
use std::any::Any;
use tracing::error;

use crate::dto::ErrorResponse;

/// Failures surfaced by the HTTP layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required parameters: text, source_lang, or target_lang")]
    MissingParameters,
    /// Anything else that stopped the request from producing a translation
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::MissingParameters => ErrorResponse {
                error: self.to_string(),
                translation_source: None,
            },
            ApiError::Internal(msg) => {
                error!(error = %msg, "Error in /translate route");
                ErrorResponse {
                    error: msg.clone(),
                    translation_source: Some(TranslationSource::ErrorHandler),
                }
            }
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Render a handler panic as the same 500 body as any other internal error
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    ApiError::Internal(message).into_response()
}
