//! Line normalization for clippings input.
//!
//! Every physical line is rewritten into a logical line before it joins a
//! chunk. Separator lines pass through untouched; single-word lines get the
//! word-cleanup rule; phrases are left alone.

/// Literal line that closes every well-formed chunk.
pub const SEPARATOR: &str = "==========";

/// Any line containing this marker ends the current chunk.
pub const SEPARATOR_MARKER: &str = "====";

/// Returns true if `line` contains the chunk-ending marker.
pub fn is_separator_marker(line: &str) -> bool {
    line.contains(SEPARATOR_MARKER)
}

/// Returns true if `line` is a phrase, i.e. contains at least one space.
pub fn is_phrase(line: &str) -> bool {
    line.contains(' ')
}

/// Normalize one raw line.
///
/// - Strips the trailing `\n` (and a `\r` before it)
/// - Leaves empty lines and separator lines unchanged
/// - For single words: lowercases the first character and drops one
///   trailing ASCII punctuation character
/// - Leaves phrases unchanged
pub fn normalize(raw: &str) -> String {
    let line = strip_terminator(raw);

    if line.is_empty() || line.starts_with('=') || is_separator_marker(line) {
        return line.to_string();
    }

    if is_phrase(line) {
        return line.to_string();
    }

    clean_word(line)
}

fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

fn clean_word(word: &str) -> String {
    let mut chars = word.chars();
    let mut result = String::with_capacity(word.len());

    if let Some(first) = chars.next() {
        result.extend(first.to_lowercase());
    }
    result.push_str(chars.as_str());

    if result.ends_with(|c: char| c.is_ascii_punctuation()) {
        result.pop();
    }

    result
}
