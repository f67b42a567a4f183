//! Session log: saved work blocks, the local user, and daily totals.

mod entry;
mod log;
mod summary;
mod user;

pub use entry::SessionLogEntry;
pub use log::{save, save_at, Draft, SaveOutcome, SessionLog};
pub use summary::{daily_summaries, DailySummary};
pub use user::UserSession;
