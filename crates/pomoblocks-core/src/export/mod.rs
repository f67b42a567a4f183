//! Export of the session log for other applications.
//!
//! - CSV and Markdown renderers
//! - File download (`pomodoro_blocks.csv` / `pomodoro_blocks.md`)
//! - URL-scheme hand-off to note apps

mod csv;
mod handoff;
mod markdown;

pub use self::csv::{to_csv, CSV_HEADER};
pub use handoff::{open_url, ExportTarget};
pub use markdown::{entry_block, to_markdown};

use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};
use crate::session::SessionLogEntry;

/// Output format of a downloaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Markdown,
}

impl FileFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            FileFormat::Csv => "pomodoro_blocks.csv",
            FileFormat::Markdown => "pomodoro_blocks.md",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            FileFormat::Csv => "text/csv",
            FileFormat::Markdown => "text/markdown",
        }
    }

    pub fn render(self, entries: &[SessionLogEntry]) -> Result<String> {
        match self {
            FileFormat::Csv => to_csv(entries),
            FileFormat::Markdown => Ok(to_markdown(entries)),
        }
    }
}

/// Render `entries` and write them to `dir/<file name>`, replacing any
/// existing file. Returns the written path.
pub fn download(entries: &[SessionLogEntry], format: FileFormat, dir: &Path) -> Result<PathBuf> {
    let content = format.render(entries)?;
    let path = dir.join(format.file_name());
    std::fs::write(&path, content).map_err(|source| ExportError::WriteFailed {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        mime = format.mime_type(),
        entries = entries.len(),
        "export written"
    );
    Ok(path)
}
