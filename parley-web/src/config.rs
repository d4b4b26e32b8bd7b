use clap::Parser;
use parley_mt::gateway::{API_KEY_ENV, API_KEY_FILE_ENV};
use parley_mt::{GatewayConfig, ProviderCredentials};
use std::path::PathBuf;
use std::time::Duration;

/// Command line and environment configuration for the server
///
/// Every flag can also be supplied through the environment variable named
/// next to it; a `.env` file in the working directory is loaded first.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "parley-web",
    version,
    about = "Translation endpoint with deterministic mock fallback"
)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "PARLEY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PARLEY_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Google Translate API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// File containing the Google Translate API key
    #[arg(long, env = API_KEY_FILE_ENV)]
    pub api_key_file: Option<PathBuf>,

    /// Override the Google Translate v2 endpoint
    #[arg(long, env = "PARLEY_PROVIDER_URL")]
    pub provider_url: Option<String>,

    /// Seconds before a provider call is abandoned
    #[arg(long, env = "PARLEY_PROVIDER_TIMEOUT_SECS", default_value_t = 10)]
    pub provider_timeout_secs: u64,

    /// Never contact the provider; serve mock translations only
    #[arg(long, env = "PARLEY_MOCK_ONLY")]
    pub mock_only: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            credentials: ProviderCredentials {
                api_key: self.api_key.clone(),
                api_key_file: self.api_key_file.clone(),
            },
            base_url: self.provider_url.clone(),
            timeout: Duration::from_secs(self.provider_timeout_secs),
            mock_only: self.mock_only,
        }
    }
}
