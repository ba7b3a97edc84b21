//! Translation input preparation.
//!
//! Input is a plain word list, typically the output of the `highlights`
//! command: one word or phrase per line, `#` comments allowed.

use std::collections::HashSet;
use std::io::BufRead;

/// Clean one input line.
///
/// Returns `None` for blank lines and `#` comments. Surrounding whitespace is
/// trimmed, and single words get their first character lowercased.
pub fn prepare_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if line.contains(' ') {
        return Some(line.to_string());
    }

    let mut chars = line.chars();
    let mut word = String::with_capacity(line.len());
    if let Some(first) = chars.next() {
        word.extend(first.to_lowercase());
    }
    word.push_str(chars.as_str());
    Some(word)
}

/// Read and clean every line, dropping duplicates but keeping first-seen order.
pub fn prepare_entries<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for line in reader.lines() {
        let Some(entry) = prepare_line(&line?) else {
            continue;
        };
        if seen.insert(entry.clone()) {
            entries.push(entry);
        }
    }

    tracing::debug!(unique = entries.len(), "prepared translation entries");
    Ok(entries)
}
