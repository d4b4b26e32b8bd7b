/// Error types for the translation gateway
#[derive(Debug, thiserror::Error)]
pub enum MtError {
    /// Provider could not be configured (missing or rejected credentials)
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Transport failure talking to the provider, including timeouts
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Provider answered but the translation could not be produced
    #[error("Translation error: {0}")]
    TranslationError(String),
    /// Locale code that the provider must never see
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
    /// No provider is configured for this process
    #[error("Translation provider unavailable")]
    Unavailable,
}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            MtError::NetworkError(format!("Request timed out: {}", err))
        } else {
            MtError::NetworkError(err.to_string())
        }
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;
