//! Batched translation with result deduplication.

use std::collections::HashMap;

use super::error::TranslateError;
use super::types::{TranslationRequest, TranslationResult, Translator};
use crate::config::TranslateConfig;

/// Sends entries to a [`Translator`] in fixed-size batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPipeline {
    source_lang: String,
    target_lang: String,
    batch_size: usize,
}

impl BatchPipeline {
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        batch_size: usize,
    ) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            batch_size,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of requests needed for `entries` entries.
    pub fn batch_count(&self, entries: usize) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        (entries + self.batch_size - 1) / self.batch_size
    }

    /// Translate `entries` batch by batch.
    ///
    /// `on_batch` is called with the 1-based batch number and its entry count
    /// before each request. Results are collapsed on their stressed lemma.
    pub fn run<T: Translator + ?Sized>(
        &self,
        entries: &[String],
        translator: &T,
        mut on_batch: impl FnMut(usize, usize),
    ) -> Result<Deduplicated, TranslateError> {
        if self.batch_size == 0 {
            return Err(TranslateError::InvalidBatchSize);
        }

        let mut deduplicated = Deduplicated::default();

        for (index, batch) in entries.chunks(self.batch_size).enumerate() {
            let batch_number = index + 1;
            on_batch(batch_number, batch.len());

            let request = TranslationRequest {
                text: batch.to_vec(),
                source_lang: self.source_lang.clone(),
                target_lang: self.target_lang.clone(),
            };
            let results =
                translator
                    .translate(&request)
                    .map_err(|message| TranslateError::TranslatorFailed {
                        translator: translator.name(),
                        batch: batch_number,
                        message,
                    })?;

            if results.len() != batch.len() {
                return Err(TranslateError::ResultCountMismatch {
                    batch: batch_number,
                    sent: batch.len(),
                    got: results.len(),
                });
            }

            tracing::debug!(batch = batch_number, entries = batch.len(), "translated batch");
            for result in results {
                deduplicated.insert(result);
            }
        }

        Ok(deduplicated)
    }
}

impl From<&TranslateConfig> for BatchPipeline {
    fn from(config: &TranslateConfig) -> Self {
        Self::new(&config.source_lang, &config.target_lang, config.batch_size)
    }
}

/// Translation results keyed by stressed lemma, in first-seen order.
///
/// Inserting a result whose key is already present replaces the stored result
/// without moving it.
#[derive(Debug, Clone, Default)]
pub struct Deduplicated {
    results: Vec<TranslationResult>,
    index: HashMap<String, usize>,
}

impl Deduplicated {
    pub fn insert(&mut self, result: TranslationResult) {
        match self.index.get(&result.text_stressed_lemma) {
            Some(&position) => self.results[position] = result,
            None => {
                self.index
                    .insert(result.text_stressed_lemma.clone(), self.results.len());
                self.results.push(result);
            }
        }
    }

    pub fn get(&self, stressed_lemma: &str) -> Option<&TranslationResult> {
        self.index
            .get(stressed_lemma)
            .map(|&position| &self.results[position])
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslationResult> {
        self.results.iter()
    }
}
