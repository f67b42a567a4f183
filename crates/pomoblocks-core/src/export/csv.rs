use ::csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{ExportError, Result};
use crate::session::SessionLogEntry;

pub const CSV_HEADER: [&str; 4] = ["Timestamp", "Duration", "Title", "Notes"];

/// Render the log as CSV with every field quoted, header included.
///
/// Durations are written as `MM:SS`. Lines end with `\n`.
pub fn to_csv(entries: &[SessionLogEntry]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER).map_err(ExportError::from)?;
    for entry in entries {
        wtr.write_record([
            entry.timestamp_iso().as_str(),
            entry.duration_clock().as_str(),
            entry.title(),
            entry.notes(),
        ])
        .map_err(ExportError::from)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    // Every field came from a `&str`, so the output is valid UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
