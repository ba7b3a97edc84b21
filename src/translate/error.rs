//! Translation pipeline errors.

/// Errors from a translation batch run.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Translator '{translator}' failed on batch {batch}: {message}")]
    TranslatorFailed {
        translator: &'static str,
        batch: usize,
        message: String,
    },

    #[error("Batch {batch} returned {got} results for {sent} entries")]
    ResultCountMismatch {
        batch: usize,
        sent: usize,
        got: usize,
    },

    #[error("Batch size must be at least 1")]
    InvalidBatchSize,
}
