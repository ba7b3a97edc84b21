//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::clippings::UnknownKindPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "clippings",
    version,
    about = "Prints highlights from an e-reader clippings file",
    after_help = "Writes highlights to standard out, one highlight per line.\n\
                  Strips trailing punctuation and lowercases single words."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print highlights from a clippings file
    Highlights(HighlightsArgs),

    /// Clean and deduplicate a word list for translation
    #[command(long_about = "Clean and deduplicate a word list for translation.\n\n\
        Input is a text file of words or phrases, one to a line. Blank lines and\n\
        lines starting with '#' are skipped, single words get their first letter\n\
        lowercased, and repeated entries are dropped. If stdout is redirected,\n\
        progress is written to stderr.")]
    Prepare {
        /// Word list to prepare
        file: PathBuf,
    },

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct HighlightsArgs {
    /// Clippings file ("My Clippings.txt")
    pub file: PathBuf,

    /// Select only books with this text in the title or author
    #[arg(short, long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Select only single words
    #[arg(short, long, conflicts_with = "phrases")]
    pub words: bool,

    /// Select only phrases
    #[arg(short, long)]
    pub phrases: bool,

    /// What to do with clippings of unknown kind [default: from config]
    #[arg(long, value_enum, value_name = "POLICY")]
    pub unknown_kind: Option<UnknownKindPolicy>,

    /// Write one JSON object per highlight instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}
