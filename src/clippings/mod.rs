//! Parser for e-reader "My Clippings" exports.
//!
//! The file is a sequence of five-line records, each closed by a line of ten
//! `=` characters:
//!
//! ```text
//! Book Title (Author Name)
//! - Your Highlight on page 12 | Location 170-171 | Added on Monday, 1 January 2024
//!
//! the highlighted text
//! ==========
//! ```
//!
//! [`Clippings`] turns any [`std::io::BufRead`] into a lazy stream of
//! [`Clipping`] records. Parsing is strict: a chunk that does not end with the
//! exact separator stops the stream with [`ParseError::MalformedChunk`] and no
//! attempt is made to resynchronize.
//!
//! Note bodies that span several lines are not supported. Only the first body
//! line is kept.

mod chunk;
mod error;
mod normalize;
mod record;
mod stream;

pub use chunk::{Chunk, ChunkReader, CHUNK_LINES};
pub use error::ParseError;
pub use normalize::{is_phrase, is_separator_marker, normalize, SEPARATOR, SEPARATOR_MARKER};
pub use record::{Clipping, Kind};
pub use stream::{Clippings, UnknownKindPolicy};
