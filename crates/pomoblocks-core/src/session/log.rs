//! Append-only session log and the save operation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entry::SessionLogEntry;
use super::summary::{daily_summaries, DailySummary};
use super::user::UserSession;
use crate::error::Result;
use crate::storage::{KeyValueStore, SESSION_LOG_KEY};
use crate::timer::TimerEngine;

/// Pending title/notes inputs for the next save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub notes: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: notes.into(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.notes.clear();
    }
}

/// What `save` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(SessionLogEntry),
    /// Nobody is signed in; nothing was written and the draft is kept.
    NoActiveUser,
}

/// Entries in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SessionLog {
    entries: Vec<SessionLogEntry>,
}

impl SessionLog {
    /// Load the persisted log. Missing or unreadable data is an empty log.
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self> {
        let entries = store
            .get_json::<Vec<SessionLogEntry>>(SESSION_LOG_KEY)?
            .unwrap_or_default();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SessionLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total logged seconds.
    pub fn total_secs(&self) -> i64 {
        self.entries.iter().map(SessionLogEntry::duration_secs).sum()
    }

    /// Per-day totals in the local time zone, recomputed on every call.
    pub fn daily_summaries(&self) -> Vec<DailySummary> {
        daily_summaries(&self.entries, &chrono::Local)
    }

    /// Load for writing: an unreadable stored log is an error rather than
    /// an empty list, so appending never truncates it.
    fn load_for_append<S: KeyValueStore>(store: &S) -> Result<Self> {
        let entries = store
            .get_json_strict::<Vec<SessionLogEntry>>(SESSION_LOG_KEY)?
            .unwrap_or_default();
        Ok(Self { entries })
    }

    /// Append and write the whole list back.
    fn append<S: KeyValueStore>(&mut self, store: &S, entry: SessionLogEntry) -> Result<()> {
        self.entries.push(entry);
        store.set_json(SESSION_LOG_KEY, &self.entries)
    }
}

/// Log the work done in the current countdown.
///
/// Requires a signed-in user; without one this is a no-op that reports
/// [`SaveOutcome::NoActiveUser`]. On success the draft is cleared.
///
/// # Errors
/// Fails without writing when the stored log exists but cannot be decoded.
pub fn save<S: KeyValueStore>(
    store: &S,
    engine: &TimerEngine,
    draft: &mut Draft,
) -> Result<SaveOutcome> {
    save_at(store, engine, draft, Utc::now())
}

pub fn save_at<S: KeyValueStore>(
    store: &S,
    engine: &TimerEngine,
    draft: &mut Draft,
    now: DateTime<Utc>,
) -> Result<SaveOutcome> {
    if UserSession::current(store)?.is_none() {
        tracing::debug!("save skipped: no active user");
        return Ok(SaveOutcome::NoActiveUser);
    }

    let entry = SessionLogEntry::new(
        now,
        engine.elapsed_secs() as i64,
        draft.title.clone(),
        draft.notes.clone(),
    );
    let mut log = SessionLog::load_for_append(store)?;
    log.append(store, entry.clone())?;
    draft.clear();
    tracing::debug!(
        duration = entry.duration_secs(),
        entries = log.len(),
        "session saved"
    );
    Ok(SaveOutcome::Saved(entry))
}
