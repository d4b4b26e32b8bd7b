use parley_mt::TranslationSource;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of `POST /translate`
///
/// Fields are optional here so that a missing field is reported as a
/// validation failure rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
}

/// A request with every required field present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslateRequest {
    pub fn validate(self) -> Result<ValidRequest, ApiError> {
        match (
            non_empty(self.text),
            non_empty(self.source_lang),
            non_empty(self.target_lang),
        ) {
            (Some(text), Some(source_lang), Some(target_lang)) => Ok(ValidRequest {
                text,
                source_lang,
                target_lang,
            }),
            _ => Err(ApiError::MissingParameters),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub translation_source: TranslationSource,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_source: Option<TranslationSource>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: String,
    pub provider_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_error: Option<String>,
}
