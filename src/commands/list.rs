//! List command - show a directory's segments in playback order

use crate::{FindPlaceError, config::FindPlaceConfig, output, playlist::PlaylistSource};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, FindPlaceError>;

/// Execute the list command, writing to stdout
///
/// # Errors
/// Returns an error if the directory cannot be listed or output fails.
pub fn execute(dir: &Path, config: &FindPlaceConfig, json: bool, quiet: bool) -> Result<()> {
    let source = config.playlist()?;
    let stdout = std::io::stdout();
    write_listing(&source, dir, json, quiet, &mut stdout.lock())
}

/// Write the listing of `dir` to `out`
///
/// # Errors
/// Returns an error if listing, serialization, or writing fails.
pub fn write_listing(
    source: &dyn PlaylistSource,
    dir: &Path,
    json: bool,
    quiet: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let segments = source.list(dir)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &segments)?;
        writeln!(out)?;
        return Ok(());
    }

    if segments.is_empty() {
        if !quiet {
            writeln!(out, "No audio files found in {}", dir.display())?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "{} segment(s) in playback order:", segments.len())?;
    }
    for (index, segment) in segments.iter().enumerate() {
        writeln!(out, "{}", output::segment_line(index, segment, quiet))?;
    }
    Ok(())
}
