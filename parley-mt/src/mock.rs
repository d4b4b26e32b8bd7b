//! Mock Machine Translator for testing
//!
//! This module provides a deterministic, API-free translator for exercising
//! the resolution policy and the HTTP layer without API keys or network access.
//! Every call is counted so tests can assert that no provider call was made.
//!
//! # Example
//!
//! ```ignore
//! use parley_mt::{MachineTranslator, MockTranslator, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "en", "fr").await.unwrap();
//!     assert_eq!(result, "hello_fr");
//!     assert_eq!(mock.calls(), 1);
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::translator::{MachineTranslator, base_language};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append base target language: "hello" → "hello_fr"
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target base language) → translation
    Mappings(HashMap<(String, String), String>),

    /// Simulate API errors
    Error(String),
}

/// Mock translator that simulates various translation scenarios
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    calls: AtomicUsize,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `translate` calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        let target = base_language(target);

        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_translation(text, target_locale)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_single_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", "en", "fr").await.unwrap();
        assert_eq!(result, "hello_fr");
    }

    #[tokio::test]
    async fn test_suffix_uses_base_language() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", "en-US", "pl-PL").await.unwrap();
        assert_eq!(result, "hello_pl");
    }

    #[tokio::test]
    async fn test_mapping_single_translation() {
        let mut map = HashMap::new();
        map.insert(
            ("hello".to_string(), "fr".to_string()),
            "bonjour".to_string(),
        );

        let mock = MockTranslator::new(MockMode::Mappings(map));
        let result = mock.translate("hello", "en", "fr-CA").await.unwrap();
        assert_eq!(result, "bonjour");
    }

    #[tokio::test]
    async fn test_mapping_fallback_to_suffix() {
        let mock = MockTranslator::new(MockMode::Mappings(HashMap::new()));
        let result = mock.translate("unknown", "en", "fr").await.unwrap();
        assert_eq!(result, "unknown_fr");
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockTranslator::new(MockMode::Error("API unavailable".to_string()));
        let result = mock.translate("hello", "en", "fr").await;
        match result {
            Err(MtError::TranslationError(msg)) => assert_eq!(msg, "API unavailable"),
            _ => panic!("Expected TranslationError"),
        }
    }

    #[tokio::test]
    async fn test_calls_are_counted_even_on_error() {
        let mock = MockTranslator::new(MockMode::Error("boom".to_string()));
        assert_eq!(mock.calls(), 0);
        let _ = mock.translate("a", "en", "fr").await;
        let _ = mock.translate("b", "en", "fr").await;
        assert_eq!(mock.calls(), 2);
    }

    #[test]
    fn test_provider_name_and_availability() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
        assert!(mock.is_available());
        assert_eq!(mock.unavailable_reason(), None);
    }
}
