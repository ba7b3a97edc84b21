//! Clipping parser errors.

use std::fmt::Write as _;

/// Errors that stop a clippings parse.
///
/// Both variants are fatal: once one has been returned the stream is finished.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A chunk did not end with the exact separator line, or was cut short.
    #[error("No separator found in chunk near line {line}")]
    MalformedChunk {
        /// Physical line number of the last line read for this chunk.
        line: usize,
        /// Every normalized line collected for the chunk.
        lines: Vec<String>,
    },

    /// The underlying reader failed.
    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Approximate line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedChunk { line, .. } | Self::Read { line, .. } => *line,
        }
    }

    /// Multi-line dump of the offending chunk, one `line N: '...'` row per line.
    ///
    /// Empty for read errors.
    pub fn chunk_dump(&self) -> String {
        let mut dump = String::new();
        if let Self::MalformedChunk { lines, .. } = self {
            for (index, line) in lines.iter().enumerate() {
                let _ = writeln!(dump, "line {}: '{}'", index, line);
            }
        }
        dump
    }
}
