//! Translation batch pipeline boundary.
//!
//! Highlights collected by the parser are often fed to a translation service
//! to build vocabulary lists. This module covers the parts that do not talk to
//! the network:
//!
//! - [`prepare`] - turning a word list into deduplicated translation input
//! - [`Translator`] - the seam a service client plugs into
//! - [`BatchPipeline`] - batching requests and collapsing duplicate results
//!
//! No [`Translator`] implementation ships with this crate.

mod batch;
mod error;
mod prepare;
mod types;

pub use batch::{BatchPipeline, Deduplicated};
pub use error::TranslateError;
pub use prepare::{prepare_entries, prepare_line};
pub use types::{TranslationRequest, TranslationResult, Translator};
