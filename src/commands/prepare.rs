//! Prepare command handler

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use clippings::translate::{prepare_entries, BatchPipeline};
use clippings::Config;

use super::progress_if_redirected;

/// Print the cleaned, deduplicated entries of a word list.
pub fn handle(path: &Path) -> Result<()> {
    let config = Config::load()?;
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let entries = prepare_entries(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let pipeline = BatchPipeline::from(&config.translate);
    progress_if_redirected(&format!(
        "Processing {} unique entries in {} batches.",
        entries.len(),
        pipeline.batch_count(entries.len())
    ));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for entry in &entries {
        writeln!(out, "{}", entry)?;
    }
    out.flush()?;

    progress_if_redirected("Done.");
    Ok(())
}
