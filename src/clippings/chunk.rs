//! Chunk reading and validation.
//!
//! A chunk is the group of normalized lines between two separator lines.
//! [`ChunkReader`] collects them; [`Chunk::classify`] decides whether the
//! group is a usable record and what kind it is.

use std::io::BufRead;

use super::error::ParseError;
use super::normalize::{is_separator_marker, normalize, SEPARATOR};
use super::record::Kind;

/// Number of lines in a well-formed chunk.
pub const CHUNK_LINES: usize = 5;

/// Index of the metadata (location and time) line within a chunk.
const METADATA_LINE: usize = 1;

/// Title, metadata and separator; anything shorter has no record in it.
const MIN_CHUNK_LINES: usize = METADATA_LINE + 2;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Normalized lines collected for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    lines: Vec<String>,
    end_line: usize,
}

impl Chunk {
    pub fn new(lines: Vec<String>, end_line: usize) -> Self {
        Self { lines, end_line }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Physical line number of the last line in this chunk.
    pub fn end_line(&self) -> usize {
        self.end_line
    }

    /// Classify and validate the chunk.
    ///
    /// Returns `Ok(None)` for an empty chunk (clean end of input). Otherwise
    /// the chunk must have a metadata line before its closing line, and that
    /// closing line must be the exact [`SEPARATOR`]. Body lines may be missing,
    /// as in bookmarks.
    pub fn classify(self) -> Result<Option<(Kind, Chunk)>, ParseError> {
        if self.lines.is_empty() {
            return Ok(None);
        }

        let kind = match self.lines.get(METADATA_LINE) {
            Some(metadata) => Kind::from_metadata(metadata),
            None => return Err(self.into_malformed()),
        };

        let terminated = self.lines.last().map(String::as_str) == Some(SEPARATOR);
        if !terminated || self.lines.len() < MIN_CHUNK_LINES {
            return Err(self.into_malformed());
        }

        Ok(Some((kind, self)))
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn into_malformed(self) -> ParseError {
        ParseError::MalformedChunk {
            line: self.end_line,
            lines: self.lines,
        }
    }
}

/// Reads normalized lines from a buffered reader, one chunk at a time.
#[derive(Debug)]
pub struct ChunkReader<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> ChunkReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of physical lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next chunk.
    ///
    /// Stops after a line containing `====`, or at end of input. The returned
    /// chunk is empty only if the input was already exhausted.
    pub fn read_chunk(&mut self) -> Result<Chunk, ParseError> {
        let mut lines = Vec::with_capacity(CHUNK_LINES);

        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_line(&mut self.buf)
                .map_err(|source| ParseError::Read {
                    line: self.line + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }

            let raw = if self.line == 0 {
                self.buf.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                self.buf.as_str()
            };
            self.line += 1;

            let ends_chunk = is_separator_marker(raw);
            lines.push(normalize(raw));
            if ends_chunk {
                break;
            }
        }

        tracing::trace!(lines = lines.len(), end_line = self.line, "read chunk");
        Ok(Chunk::new(lines, self.line))
    }
}
