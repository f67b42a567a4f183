use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::format_mm_ss;

/// One saved work block. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLogEntry {
    /// Creation time, serialized as an RFC 3339 string.
    timestamp: DateTime<Utc>,
    /// Worked seconds: full length minus remaining at save time. Signed so
    /// that hand-edited or imported records still load.
    duration: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    notes: String,
}

impl SessionLogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        duration: i64,
        title: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            duration,
            title: title.into(),
            notes: notes.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// ISO 8601 rendering with millisecond precision, e.g.
    /// `2025-03-07T14:05:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }

    pub fn duration_secs(&self) -> i64 {
        self.duration
    }

    /// `MM:SS` rendering of the duration.
    pub fn duration_clock(&self) -> String {
        format_mm_ss(self.duration)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}
