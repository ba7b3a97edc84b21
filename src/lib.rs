//! Extract cleaned highlights from an e-reader "My Clippings" export.
//!
//! - [`clippings`] - the record parser
//! - [`filter`] - highlight selection for output
//! - [`translate`] - translation batch pipeline boundary
//! - [`config`] - TOML configuration
//! - [`cli`] - command-line definitions

pub mod cli;
pub mod clippings;
pub mod config;
pub mod filter;
pub mod logging;
pub mod translate;

pub use clippings::{Clipping, Clippings, Kind, ParseError, UnknownKindPolicy};
pub use config::Config;
pub use filter::{HighlightFilter, Selection};
