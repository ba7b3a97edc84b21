//! Clipping record types.

use serde::Serialize;

use super::chunk::Chunk;
use super::normalize::is_phrase;

/// Kind of clipping, taken from the metadata line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Note,
    Highlight,
    Bookmark,
    Unknown,
}

impl Kind {
    /// Classify a metadata line.
    ///
    /// Matches are case-sensitive and checked in the order
    /// `Note`, `Highlight`, `Bookmark`.
    pub fn from_metadata(line: &str) -> Self {
        if line.contains("Note") {
            Kind::Note
        } else if line.contains("Highlight") {
            Kind::Highlight
        } else if line.contains("Bookmark") {
            Kind::Bookmark
        } else {
            Kind::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Note => "note",
            Kind::Highlight => "highlight",
            Kind::Bookmark => "bookmark",
            Kind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated record from a clippings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clipping {
    pub kind: Kind,
    pub title_and_author: String,
    pub location_and_time: String,
    #[serde(skip)]
    pub blank_line: String,
    pub highlight_is_phrase: bool,
    pub highlight: String,
    #[serde(skip)]
    pub separator: String,
}

impl Clipping {
    /// Map a validated chunk onto a record, field by position.
    ///
    /// The closing line is always the separator. Missing body lines (as in
    /// bookmarks) become empty strings. Note bodies spanning several lines
    /// keep their first line; the rest are dropped.
    pub fn from_chunk(kind: Kind, chunk: Chunk) -> Self {
        let mut lines = chunk.into_lines();
        let separator = lines.pop().unwrap_or_default();

        let mut lines = lines.into_iter();
        let mut next = || lines.next().unwrap_or_default();

        let title_and_author = next();
        let location_and_time = next();
        let blank_line = next();
        let highlight = next();

        Self {
            kind,
            title_and_author,
            location_and_time,
            blank_line,
            highlight_is_phrase: is_phrase(&highlight),
            highlight,
            separator,
        }
    }
}
