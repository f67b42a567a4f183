use crate::session::SessionLogEntry;

pub const ENTRY_SEPARATOR: &str = "\n\n---\n\n";
pub const TAG: &str = "#pomodoro";

/// Render one entry as a note block.
pub fn entry_block(entry: &SessionLogEntry) -> String {
    format!(
        "# {title}\n- Duration: {duration}\n- Timestamp: {timestamp}\n\n{notes}\n\n{TAG}",
        title = entry.title(),
        duration = entry.duration_clock(),
        timestamp = entry.timestamp_iso(),
        notes = entry.notes(),
    )
}

/// Render the whole log, blocks separated by horizontal rules.
pub fn to_markdown(entries: &[SessionLogEntry]) -> String {
    entries
        .iter()
        .map(entry_block)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}
