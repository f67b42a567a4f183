//! Hand-off of Markdown to note-taking apps through their URL schemes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// Note apps that accept new content via a URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    #[default]
    Obsidian,
    Bear,
    Drafts,
}

impl ExportTarget {
    pub const ALL: [ExportTarget; 3] = [
        ExportTarget::Obsidian,
        ExportTarget::Bear,
        ExportTarget::Drafts,
    ];

    /// Everything up to and including the `=` of the content parameter.
    fn url_prefix(self) -> &'static str {
        match self {
            ExportTarget::Obsidian => "obsidian://new?content=",
            ExportTarget::Bear => "bear://x-callback-url/create?text=",
            ExportTarget::Drafts => "drafts://x-callback-url/create?text=",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportTarget::Obsidian => "obsidian",
            ExportTarget::Bear => "bear",
            ExportTarget::Drafts => "drafts",
        }
    }

    /// Build the hand-off URL with `markdown` percent-encoded.
    pub fn url_for(self, markdown: &str) -> String {
        format!("{}{}", self.url_prefix(), urlencoding::encode(markdown))
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportTarget {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ExportError::UnknownTarget(s.to_string()))
    }
}

/// Open a hand-off URL with the platform opener.
pub fn open_url(url: &str) -> Result<()> {
    tracing::debug!(bytes = url.len(), "opening hand-off url");
    open::that(url).map_err(|source| ExportError::OpenFailed {
        url: url.chars().take(64).collect(),
        source,
    })?;
    Ok(())
}
