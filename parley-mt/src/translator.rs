//! Machine Translation trait and locale helpers
//!
//! This module defines the `MachineTranslator` capability trait. The gateway
//! selects one implementation at startup (the Google Translate adapter or the
//! mock-only adapter) and the rest of the system only ever talks to the trait.
//!
//! # Example
//!
//! ```ignore
//! use parley_mt::{MachineTranslator, GoogleTranslateProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::from_env()?;
//!     let result = provider.translate("Hello, world!", "en", "fr").await?;
//!     println!("{}", result); // "Bonjour, le monde!"
//!     Ok(())
//! }
//! ```

use crate::error::{MtError, MtResult};
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations handle the actual translation work, whether through an
/// API (Google Translate) or deterministic logic (mock adapters).
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string from source to target locale
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code (e.g., "en", "en-US")
    /// * `target_locale` - Target language code (e.g., "fr", "fr-FR")
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError)` - If translation fails
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for logging and the health endpoint.
    fn provider_name(&self) -> &str;

    /// Whether this translator is backed by a working provider client
    ///
    /// Decided once when the translator is built and never changes afterwards.
    /// A failing `translate` call does not make a translator unavailable.
    fn is_available(&self) -> bool {
        true
    }

    /// Why the provider could not be set up, for translators that are not available
    fn unavailable_reason(&self) -> Option<&str> {
        None
    }
}

/// Extract the base language of a locale tag
///
/// Everything before the first hyphen, without case folding:
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `en` → `en` (unchanged)
///
/// # Example
///
/// ```ignore
/// assert_eq!(base_language("pl-PL"), "pl");
/// ```
pub fn base_language(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Validate that a locale code is in acceptable format
///
/// Checks that the locale code contains only alphanumeric characters,
/// hyphens, and underscores (following ISO 639 conventions).
///
/// # Returns
///
/// * `Ok(())` - If the locale is valid
/// * `Err(MtError::InvalidLocale)` - If the locale is invalid
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("Locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}
