//! Request/response types and the [`Translator`] trait.

use serde::{Deserialize, Serialize};

/// One batch sent to a translation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: Vec<String>,
    pub source_lang: String,
    pub target_lang: String,
}

/// Service result for a single input entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
    pub stressed_text: String,
    pub text_lemma: String,
    pub text_stressed_lemma: String,
    pub translation: String,
    pub stressed_translation: String,
    pub translation_lemma: String,
    pub translation_stressed_lemma: String,
    pub detected_source_lang: String,
}

/// A translation service client.
///
/// Implementations own their transport, retry policy and timeouts. The
/// pipeline calls [`Translator::translate`] once per batch, in order, and
/// expects one result per entry in `request.text`.
pub trait Translator {
    /// Human-readable name for error messages.
    fn name(&self) -> &'static str;

    /// Translate one batch.
    fn translate(&self, request: &TranslationRequest) -> Result<Vec<TranslationResult>, String>;
}
