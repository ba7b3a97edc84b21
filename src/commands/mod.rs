//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod highlights;
pub mod prepare;

/// Write a progress message to stderr, but only when stdout is redirected.
///
/// Keeps an interactive terminal free of noise while still showing progress
/// when output goes to a file or pipe.
pub fn progress_if_redirected(message: &str) {
    if !atty::is(atty::Stream::Stdout) {
        eprintln!("{}", message);
    }
}
