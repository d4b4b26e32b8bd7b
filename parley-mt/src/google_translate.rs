//! Google Translate API provider for machine translation
//!
//! This module integrates with Google Translate API v2 to provide real
//! machine translation capabilities.
//!
//! # Authentication
//!
//! The provider authenticates with an API key sent in the `X-Goog-Api-Key`
//! header. [`GoogleTranslateProvider::from_env`]
//! reads it from the `GOOGLE_TRANSLATE_API_KEY` environment variable; the web
//! server resolves it through [`crate::gateway::ProviderCredentials`] instead.
//! Obtain a key from: https://console.cloud.google.com/
//!
//! # Example
//!
//! ```ignore
//! use parley_mt::{MachineTranslator, GoogleTranslateProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::from_env()?;
//!     let result = provider.translate("Hello, world!", "en-US", "fr-FR").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::translator::{MachineTranslator, base_language, validate_locale};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// Header carrying the API key, so the key never appears in a request URL
const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// Public endpoint of the Google Translate v2 API
pub const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Translate API v2 provider
///
/// Communicates with Google's translation API to perform real translations.
/// Every request is bounded by the client timeout; a timeout surfaces as
/// `MtError::NetworkError` like any other transport failure.
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for Google Translate API
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Maximum characters per string (30K per Google Translate API limits)
    const MAX_CHARS_PER_STRING: usize = 30_000;

    /// Request timeout used by [`GoogleTranslateProvider::new`]
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a new GoogleTranslateProvider with an explicit API key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If API key is empty or HTTP client creation fails
    pub fn new(api_key: String) -> MtResult<Self> {
        Self::with_timeout(api_key, Self::DEFAULT_TIMEOUT)
    }

    /// Create a provider whose requests give up after `timeout`
    pub fn with_timeout(api_key: String, timeout: Duration) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MtError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.trim().to_string(),
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a GoogleTranslateProvider from the `GOOGLE_TRANSLATE_API_KEY` environment variable
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If environment variable is not set or creation fails
    pub fn from_env() -> MtResult<Self> {
        let api_key = std::env::var("GOOGLE_TRANSLATE_API_KEY").map_err(|_| {
            MtError::ConfigError(
                "GOOGLE_TRANSLATE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Self::new(api_key)
    }

    /// Point the provider at a different v2-compatible endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Endpoint this provider sends requests to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one text to the API and pull the translation out of the response
    ///
    /// Language codes are reduced to their base language before sending.
    async fn request_translation(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        let body = json!({
            "q": [text],
            "source": base_language(source_locale),
            "target": base_language(target_locale),
            "format": "text"
        });

        let response = self
            .client
            .post(&self.base_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        let translation = json["data"]["translations"]
            .as_array()
            .and_then(|translations| translations.first())
            .ok_or_else(|| {
                MtError::TranslationError(
                    "Invalid API response: missing 'data.translations' array".to_string(),
                )
            })?;

        translation["translatedText"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                MtError::TranslationError(
                    "Invalid API response: missing 'translatedText' field".to_string(),
                )
            })
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        if text.chars().count() > Self::MAX_CHARS_PER_STRING {
            return Err(MtError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }

        self.request_translation(text, source_locale, target_locale)
            .await
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
