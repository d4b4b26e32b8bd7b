use axum::{Json, body::Bytes, extract::State};
use parley_mt::{MachineTranslator, resolve};
use tracing::info;

use crate::AppState;
use crate::dto::{HealthResponse, TranslateRequest, TranslateResponse};
use crate::error::ApiError;

/// `POST /translate`
///
/// The body is decoded by hand so that an unreadable body is reported as an
/// internal error rather than axum's default rejection.
pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request = decode_request(&body)?.validate()?;

    info!(
        source_lang = %request.source_lang,
        target_lang = %request.target_lang,
        "Translation requested"
    );

    let resolution = resolve(
        state.translator.as_ref(),
        &request.text,
        &request.source_lang,
        &request.target_lang,
    )
    .await;

    Ok(Json(TranslateResponse {
        translated_text: resolution.text,
        source_lang: request.source_lang,
        target_lang: request.target_lang,
        translation_source: resolution.source,
    }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider: state.translator.provider_name().to_string(),
        provider_available: state.translator.is_available(),
        provider_error: state.translator.unavailable_reason().map(String::from),
    })
}

/// Serde accepts a JSON array for a struct, so the body must be checked to be
/// an object before it is read as a request.
fn decode_request(body: &[u8]) -> Result<TranslateRequest, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::Internal(format!("Failed to decode JSON body: {}", e)))?;
    if !value.is_object() {
        return Err(ApiError::Internal(
            "Request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| ApiError::Internal(format!("Failed to decode JSON body: {}", e)))
}
