//! Translation resolution policy
//!
//! Maps provider availability, whether the two languages share a base code,
//! and the outcome of at most one provider call to the text returned to the
//! caller and the label describing where it came from.
//!
//! | available | same base | call    | text                                      | source                       |
//! |-----------|-----------|---------|-------------------------------------------|------------------------------|
//! | yes       | yes       | none    | input                                     | `no_translation_needed`      |
//! | yes       | no        | ok      | provider output                           | `google_translate_api`       |
//! | yes       | no        | error   | `Mock (API Error): "<text>" (to <base>)`  | `mock_api_error`             |
//! | no        | yes       | none    | input                                     | `mock_no_translation_needed` |
//! | no        | no        | none    | `Mock: "<text>" (to <base>)`              | `mock_unavailable`           |

use crate::error::MtResult;
use crate::translator::{MachineTranslator, base_language};
use serde::Serialize;
use tracing::{info, warn};

/// Label telling the caller how `translated_text` was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationSource {
    NoTranslationNeeded,
    GoogleTranslateApi,
    MockApiError,
    MockNoTranslationNeeded,
    MockUnavailable,
    /// Request failed before a translation could be produced
    ErrorHandler,
}

impl TranslationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationSource::NoTranslationNeeded => "no_translation_needed",
            TranslationSource::GoogleTranslateApi => "google_translate_api",
            TranslationSource::MockApiError => "mock_api_error",
            TranslationSource::MockNoTranslationNeeded => "mock_no_translation_needed",
            TranslationSource::MockUnavailable => "mock_unavailable",
            TranslationSource::ErrorHandler => "error_handler",
        }
    }
}

impl std::fmt::Display for TranslationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final text and label for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub source: TranslationSource,
}

impl Resolution {
    fn new(text: impl Into<String>, source: TranslationSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// What to do with a request before any provider call happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Return the input text unchanged under the given label
    Echo(TranslationSource),
    /// Return the unavailable-provider placeholder
    MockUnavailable,
    /// Ask the provider, then [`settle_call`]
    CallProvider,
}

/// Choose the plan from availability and the language comparison alone
pub fn plan(available: bool, same_language: bool) -> Plan {
    match (available, same_language) {
        (true, true) => Plan::Echo(TranslationSource::NoTranslationNeeded),
        (true, false) => Plan::CallProvider,
        (false, true) => Plan::Echo(TranslationSource::MockNoTranslationNeeded),
        (false, false) => Plan::MockUnavailable,
    }
}

/// Placeholder used when no provider is configured
pub fn mock_unavailable_text(text: &str, target_base: &str) -> String {
    format!("Mock: \"{}\" (to {})", text, target_base)
}

/// Placeholder used when the provider call failed
pub fn mock_api_error_text(text: &str, target_base: &str) -> String {
    format!("Mock (API Error): \"{}\" (to {})", text, target_base)
}

/// Turn the result of a provider call into the response text and label
pub fn settle_call(text: &str, target_base: &str, result: &MtResult<String>) -> Resolution {
    match result {
        Ok(translated) => Resolution::new(translated.clone(), TranslationSource::GoogleTranslateApi),
        Err(_) => Resolution::new(
            mock_api_error_text(text, target_base),
            TranslationSource::MockApiError,
        ),
    }
}

/// Resolve one translation request
///
/// Calls `translator` at most once and only when it is available and the
/// base languages differ. Call failures are logged and folded into the
/// `mock_api_error` outcome; they never escape this function.
pub async fn resolve(
    translator: &dyn MachineTranslator,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> Resolution {
    let source_base = base_language(source_lang);
    let target_base = base_language(target_lang);

    match plan(translator.is_available(), source_base == target_base) {
        Plan::Echo(source) => {
            info!(%source, lang = target_base, "Source and target language match, returning input");
            Resolution::new(text, source)
        }
        Plan::MockUnavailable => {
            info!(text, "Translation provider not available, using mock translation");
            Resolution::new(
                mock_unavailable_text(text, target_base),
                TranslationSource::MockUnavailable,
            )
        }
        Plan::CallProvider => {
            let result = translator.translate(text, source_base, target_base).await;
            match &result {
                Ok(translated) => info!(
                    provider = translator.provider_name(),
                    "Translated '{}' -> '{}'",
                    text,
                    translated
                ),
                Err(e) => warn!(
                    provider = translator.provider_name(),
                    error = %e,
                    "Translation call failed for '{}', falling back to mock translation",
                    text
                ),
            }
            settle_call(text, target_base, &result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MtError;
    use crate::gateway::UnavailableTranslator;
    use crate::mock::{MockMode, MockTranslator};
    use std::collections::HashMap;

    // ========== Pure Policy Tests ==========

    #[test]
    fn test_plan_covers_every_combination() {
        assert_eq!(
            plan(true, true),
            Plan::Echo(TranslationSource::NoTranslationNeeded)
        );
        assert_eq!(plan(true, false), Plan::CallProvider);
        assert_eq!(
            plan(false, true),
            Plan::Echo(TranslationSource::MockNoTranslationNeeded)
        );
        assert_eq!(plan(false, false), Plan::MockUnavailable);
    }

    #[test]
    fn test_mock_templates_are_exact() {
        assert_eq!(mock_unavailable_text("Hello", "pl"), "Mock: \"Hello\" (to pl)");
        assert_eq!(
            mock_api_error_text("Hello", "pl"),
            "Mock (API Error): \"Hello\" (to pl)"
        );
    }

    #[test]
    fn test_mock_templates_do_not_escape_quotes() {
        assert_eq!(
            mock_unavailable_text("say \"hi\"", "de"),
            "Mock: \"say \"hi\"\" (to de)"
        );
    }

    #[test]
    fn test_settle_call_success() {
        let resolution = settle_call("Hello", "fr", &Ok("Bonjour".to_string()));
        assert_eq!(resolution.text, "Bonjour");
        assert_eq!(resolution.source, TranslationSource::GoogleTranslateApi);
    }

    #[test]
    fn test_settle_call_failure() {
        let resolution = settle_call(
            "Hello",
            "fr",
            &Err(MtError::NetworkError("timed out".to_string())),
        );
        assert_eq!(resolution.text, "Mock (API Error): \"Hello\" (to fr)");
        assert_eq!(resolution.source, TranslationSource::MockApiError);
    }

    #[test]
    fn test_source_labels_serialize_snake_case() {
        let labels = [
            (TranslationSource::NoTranslationNeeded, "no_translation_needed"),
            (TranslationSource::GoogleTranslateApi, "google_translate_api"),
            (TranslationSource::MockApiError, "mock_api_error"),
            (
                TranslationSource::MockNoTranslationNeeded,
                "mock_no_translation_needed",
            ),
            (TranslationSource::MockUnavailable, "mock_unavailable"),
            (TranslationSource::ErrorHandler, "error_handler"),
        ];
        for (source, expected) in labels {
            assert_eq!(
                serde_json::to_value(source).unwrap(),
                serde_json::Value::String(expected.to_string())
            );
            assert_eq!(source.as_str(), expected);
            assert_eq!(source.to_string(), expected);
        }
    }

    // ========== Resolve Tests ==========

    #[tokio::test]
    async fn test_available_same_language_skips_call() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let resolution = resolve(&mock, "Hello", "en-US", "en-GB").await;
        assert_eq!(resolution.text, "Hello");
        assert_eq!(resolution.source, TranslationSource::NoTranslationNeeded);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_available_success_uses_provider_text() {
        let mut map = HashMap::new();
        map.insert(("Hello".to_string(), "pl".to_string()), "Cześć".to_string());
        let mock = MockTranslator::new(MockMode::Mappings(map));

        let resolution = resolve(&mock, "Hello", "en-US", "pl-PL").await;
        assert_eq!(resolution.text, "Cześć");
        assert_eq!(resolution.source, TranslationSource::GoogleTranslateApi);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_available_failure_falls_back_to_api_error_mock() {
        let mock = MockTranslator::new(MockMode::Error("quota exceeded".to_string()));
        let resolution = resolve(&mock, "Hello", "en-US", "pl-PL").await;
        assert_eq!(resolution.text, "Mock (API Error): \"Hello\" (to pl)");
        assert_eq!(resolution.source, TranslationSource::MockApiError);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_does_not_change_availability() {
        let mock = MockTranslator::new(MockMode::Error("boom".to_string()));
        let _ = resolve(&mock, "Hello", "en", "fr").await;
        assert!(mock.is_available());

        let second = resolve(&mock, "Hello", "en", "fr").await;
        assert_eq!(second.source, TranslationSource::MockApiError);
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_unavailable_same_language() {
        let translator = UnavailableTranslator::new("no key");
        let resolution = resolve(&translator, "Hello", "en-US", "en-GB").await;
        assert_eq!(resolution.text, "Hello");
        assert_eq!(resolution.source, TranslationSource::MockNoTranslationNeeded);
    }

    #[tokio::test]
    async fn test_unavailable_different_language() {
        let translator = UnavailableTranslator::new("no key");
        let resolution = resolve(&translator, "Hello", "en-US", "pl-PL").await;
        assert_eq!(resolution.text, "Mock: \"Hello\" (to pl)");
        assert_eq!(resolution.source, TranslationSource::MockUnavailable);
    }

    #[tokio::test]
    async fn test_provider_receives_base_codes() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let resolution = resolve(&mock, "Hello", "en-US", "de-AT").await;
        assert_eq!(resolution.text, "Hello_de");
    }

    #[tokio::test]
    async fn test_region_case_is_not_folded() {
        // Base codes compare exactly; "EN" and "en" are different languages here
        let translator = UnavailableTranslator::new("no key");
        let resolution = resolve(&translator, "Hi", "EN-US", "en-GB").await;
        assert_eq!(resolution.source, TranslationSource::MockUnavailable);
        assert_eq!(resolution.text, "Mock: \"Hi\" (to en)");
    }
}
