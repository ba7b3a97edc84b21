//! Consumer-side selection of clipping records.
//!
//! The parser yields every record it reads. This module decides which of them
//! reach the output: highlights only, optionally narrowed to one book and to
//! single words or phrases.

use crate::clippings::{Clipping, Kind};

/// Word/phrase selection for highlights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    /// Only highlights without a space.
    Words,
    /// Only highlights containing a space.
    Phrases,
}

impl Selection {
    pub fn from_flags(words: bool, phrases: bool) -> Self {
        match (words, phrases) {
            (true, false) => Selection::Words,
            (false, true) => Selection::Phrases,
            _ => Selection::All,
        }
    }

    fn accepts(&self, is_phrase: bool) -> bool {
        match self {
            Selection::All => true,
            Selection::Words => !is_phrase,
            Selection::Phrases => is_phrase,
        }
    }
}

/// Highlight filter applied to the record stream.
#[derive(Debug, Clone, Default)]
pub struct HighlightFilter {
    /// Lowercased title/author needle.
    title: Option<String>,
    selection: Selection,
}

impl HighlightFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only records whose title/author contains `needle`, ignoring case.
    pub fn with_title(mut self, needle: impl AsRef<str>) -> Self {
        self.title = Some(needle.as_ref().to_lowercase());
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Whether `clipping` should be written out.
    pub fn matches(&self, clipping: &Clipping) -> bool {
        if clipping.kind != Kind::Highlight {
            return false;
        }

        if !self.selection.accepts(clipping.highlight_is_phrase) {
            return false;
        }

        match &self.title {
            Some(needle) => clipping.title_and_author.to_lowercase().contains(needle),
            None => true,
        }
    }
}

/// Counts gathered while filtering a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub seen: usize,
    pub written: usize,
    pub unknown: usize,
}

impl FilterStats {
    pub fn record(&mut self, clipping: &Clipping, written: bool) {
        self.seen += 1;
        if clipping.kind == Kind::Unknown {
            self.unknown += 1;
        }
        if written {
            self.written += 1;
        }
    }
}
