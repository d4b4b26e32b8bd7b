//! Translation gateway for parley
//!
//! This crate wraps an external machine translation provider and decides,
//! per request, whether to return a real translation, the input unchanged,
//! or a deterministic mock placeholder.
//!
//! # Workflow Example
//!
//! ```ignore
//! use parley_mt::{GatewayConfig, ProviderCredentials, initialize, resolve};
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Pick the translator once, at startup
//!     let config = GatewayConfig {
//!         credentials: ProviderCredentials::from_env(),
//!         ..GatewayConfig::default()
//!     };
//!     let translator = initialize(&config);
//!
//!     // 2. Resolve each request against it
//!     let resolution = resolve(translator.as_ref(), "Hello", "en-US", "pl-PL").await;
//!     println!("{} ({})", resolution.text, resolution.source);
//! }
//! ```

pub mod error;
pub mod gateway;
pub mod google_translate;
pub mod mock;
pub mod resolution;
pub mod translator;

// Re-export main types for convenient access
pub use error::{MtError, MtResult};
pub use gateway::{GatewayConfig, ProviderCredentials, UnavailableTranslator, connect, initialize};
pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use resolution::{Resolution, TranslationSource, resolve};
pub use translator::{MachineTranslator, base_language};
