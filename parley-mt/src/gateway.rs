//! Provider gateway
//!
//! Decides once, at startup, which translator serves the process: the Google
//! Translate adapter when credentials resolve and the client builds, or the
//! [`UnavailableTranslator`] otherwise. Construction failures are logged and
//! swallowed so a misconfigured provider degrades to mock output instead of
//! stopping the server.

use crate::error::{MtError, MtResult};
use crate::google_translate::GoogleTranslateProvider;
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable holding the API key itself
pub const API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";

/// Environment variable holding a path to a file containing the API key
pub const API_KEY_FILE_ENV: &str = "GOOGLE_TRANSLATE_API_KEY_FILE";

/// Where the provider API key comes from
///
/// An inline key wins over a key file.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub api_key: Option<String>,
    pub api_key_file: Option<PathBuf>,
}

impl ProviderCredentials {
    /// Read both sources from the process environment
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            api_key_file: std::env::var_os(API_KEY_FILE_ENV).map(PathBuf::from),
        }
    }

    /// Produce the API key, or explain why there is none
    pub fn resolve_api_key(&self) -> MtResult<String> {
        if let Some(key) = self.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }

        if let Some(path) = &self.api_key_file {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                MtError::ConfigError(format!(
                    "Failed to read API key file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let key = contents.trim();
            if key.is_empty() {
                return Err(MtError::ConfigError(format!(
                    "API key file '{}' is empty",
                    path.display()
                )));
            }
            return Ok(key.to_string());
        }

        Err(MtError::ConfigError(format!(
            "Neither {} nor {} is set",
            API_KEY_ENV, API_KEY_FILE_ENV
        )))
    }
}

/// Everything the gateway needs to build a provider client
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub credentials: ProviderCredentials,
    /// Override for the v2 endpoint; `None` uses the public Google endpoint
    pub base_url: Option<String>,
    pub timeout: Duration,
    /// Skip provider construction entirely
    pub mock_only: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            credentials: ProviderCredentials::default(),
            base_url: None,
            timeout: GoogleTranslateProvider::DEFAULT_TIMEOUT,
            mock_only: false,
        }
    }
}

/// Build the Google Translate adapter, reporting why it could not be built
pub fn connect(config: &GatewayConfig) -> MtResult<GoogleTranslateProvider> {
    if config.mock_only {
        return Err(MtError::ConfigError(
            "mock-only mode requested".to_string(),
        ));
    }

    let api_key = config.credentials.resolve_api_key()?;
    let provider = GoogleTranslateProvider::with_timeout(api_key, config.timeout)?;

    Ok(match &config.base_url {
        Some(url) => provider.with_base_url(url.clone()),
        None => provider,
    })
}

/// Select the translator for this process
///
/// Never fails: any construction error yields an [`UnavailableTranslator`].
pub fn initialize(config: &GatewayConfig) -> Arc<dyn MachineTranslator> {
    match connect(config) {
        Ok(provider) => {
            info!(
                provider = provider.provider_name(),
                base_url = provider.base_url(),
                "Translation provider initialized"
            );
            Arc::new(provider)
        }
        Err(e) => {
            warn!(
                error = %e,
                "Translation provider unavailable, only mock translations will be provided"
            );
            Arc::new(UnavailableTranslator::new(e.to_string()))
        }
    }
}

/// Mock-only adapter used when no provider client could be built
#[derive(Debug, Clone)]
pub struct UnavailableTranslator {
    reason: String,
}

impl UnavailableTranslator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl MachineTranslator for UnavailableTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source_locale: &str,
        _target_locale: &str,
    ) -> MtResult<String> {
        Err(MtError::Unavailable)
    }

    fn provider_name(&self) -> &str {
        "Unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn unavailable_reason(&self) -> Option<&str> {
        Some(&self.reason)
    }
}
