//! Highlights command handler

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};

use clippings::cli::HighlightsArgs;
use clippings::config::OutputFormat;
use clippings::filter::FilterStats;
use clippings::{Clippings, Config, HighlightFilter, Selection};

/// Print the highlights selected by `args`.
pub fn handle(args: &HighlightsArgs) -> Result<()> {
    let config = Config::load()?;

    let policy = args.unknown_kind.unwrap_or(config.parser.unknown_kind);
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let mut filter =
        HighlightFilter::new().with_selection(Selection::from_flags(args.words, args.phrases));
    if let Some(needle) = &args.filter {
        filter = filter.with_title(needle);
    }

    let clippings = Clippings::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?
        .with_policy(policy);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = write_highlights(clippings, &filter, format, &mut out)?;
    out.flush()?;

    tracing::info!(
        seen = stats.seen,
        written = stats.written,
        unknown = stats.unknown,
        file = %args.file.display(),
        "highlights written"
    );
    Ok(())
}

/// Write every record accepted by `filter` to `out`.
///
/// Records already written stay written if the stream later fails; the
/// parse error is returned unchanged so callers can inspect it.
pub fn write_highlights<R: BufRead, W: Write>(
    clippings: Clippings<R>,
    filter: &HighlightFilter,
    format: OutputFormat,
    out: &mut W,
) -> Result<FilterStats> {
    let mut stats = FilterStats::default();

    for clipping in clippings {
        let clipping = clipping?;
        let keep = filter.matches(&clipping);
        stats.record(&clipping, keep);

        if !keep {
            tracing::trace!(kind = %clipping.kind, title = %clipping.title_and_author, "skipped");
            continue;
        }

        match format {
            OutputFormat::Text => writeln!(out, "{}", clipping.highlight)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&clipping)?)?,
        }
    }

    Ok(stats)
}
