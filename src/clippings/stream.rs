//! Lazy record stream over a clippings source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::chunk::ChunkReader;
use super::error::ParseError;
use super::record::{Clipping, Kind};

/// What the stream does when it meets a chunk of unknown kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKindPolicy {
    /// Yield the record as [`Kind::Unknown`]; consumers skip it.
    #[default]
    Continue,
    /// Treat the first unknown chunk as the end of input.
    Stop,
}

/// Forward-only iterator of [`Clipping`]s read from `R`.
///
/// Yields `Err` at most once; after that (or after clean end of input) it
/// only returns `None`.
#[derive(Debug)]
pub struct Clippings<R> {
    chunks: ChunkReader<R>,
    policy: UnknownKindPolicy,
    finished: bool,
}

impl Clippings<BufReader<File>> {
    /// Open a clippings file for reading.
    ///
    /// The file handle is owned by the returned stream and closed when it is dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Clippings<R> {
    pub fn new(reader: R) -> Self {
        Self {
            chunks: ChunkReader::new(reader),
            policy: UnknownKindPolicy::default(),
            finished: false,
        }
    }

    pub fn with_policy(mut self, policy: UnknownKindPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Physical lines consumed so far.
    pub fn line(&self) -> usize {
        self.chunks.line()
    }

    fn next_record(&mut self) -> Result<Option<Clipping>, ParseError> {
        let chunk = self.chunks.read_chunk()?;
        let Some((kind, chunk)) = chunk.classify()? else {
            return Ok(None);
        };

        if kind == Kind::Unknown && self.policy == UnknownKindPolicy::Stop {
            tracing::debug!(line = chunk.end_line(), "unknown clipping kind, stopping");
            return Ok(None);
        }

        Ok(Some(Clipping::from_chunk(kind, chunk)))
    }
}

impl<'a> Clippings<&'a [u8]> {
    /// Parse clippings from an in-memory string.
    pub fn parse_str(content: &'a str) -> Self {
        Self::new(content.as_bytes())
    }
}

impl<R: BufRead> Iterator for Clippings<R> {
    type Item = Result<Clipping, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_record() {
            Ok(Some(clipping)) => Some(Ok(clipping)),
            Ok(None) => {
                self.finished = true;
                tracing::debug!(lines = self.line(), "clippings exhausted");
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Clippings<R> {}
