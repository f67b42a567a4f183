//! # Pomoblocks Core Library
//!
//! Business logic for Pomoblocks, a local countdown timer that logs worked
//! blocks and exports them to note-taking apps. The CLI binary is a thin
//! layer over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a plain state struct advanced one second per `tick()`;
//!   the [`Ticker`] task supplies the ticks
//! - **Session Log**: append-only list of saved blocks, the local user and
//!   per-day totals
//! - **Storage**: SQLite key-value persistence and TOML configuration
//! - **Export**: CSV, Markdown, file download and URL-scheme hand-off
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine
//! - [`SessionLog`]: persisted entries
//! - [`KeyValueStore`]: persistence seam, backed by [`Database`]
//! - [`Config`]: application configuration

pub mod error;
pub mod events;
pub mod export;
pub mod notify;
pub mod session;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, ExportError, StorageError};
pub use events::Event;
pub use export::{ExportTarget, FileFormat};
pub use session::{DailySummary, Draft, SaveOutcome, SessionLog, SessionLogEntry, UserSession};
pub use storage::{Config, Database, KeyValueStore, MemoryStore};
pub use timer::{SessionMode, Ticker, TimerEngine};
