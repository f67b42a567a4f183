mod config;
pub mod database;
mod memory;

pub use config::{Config, ExportConfig, NotificationsConfig, TimerConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StorageError};

/// Persisted key holding the JSON list of session log entries.
pub const SESSION_LOG_KEY: &str = "session_log";
/// Persisted key holding the JSON user session; absent when logged out.
pub const USER_SESSION_KEY: &str = "user_session";
/// Persisted key holding the serialized countdown engine.
pub const TIMER_ENGINE_KEY: &str = "timer_engine";

/// String-keyed, string-valued local store.
///
/// Writes are synchronous; there is exactly one writer.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;

    /// Read and decode a JSON value.
    ///
    /// A missing key and an undecodable value both yield `Ok(None)`; the
    /// latter is logged and otherwise ignored.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable persisted value");
                Ok(None)
            }
        }
    }

    /// Read and decode a JSON value, failing on an undecodable one.
    ///
    /// Callers that write the value back use this so a record they cannot
    /// read is never replaced.
    fn get_json_strict<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            StorageError::Unreadable {
                key: key.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `POMOBLOCKS_HOME` overrides the location outright. Otherwise the
/// directory is `~/.config/pomoblocks[-dev]/`, with the `-dev` suffix when
/// `POMOBLOCKS_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("POMOBLOCKS_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("POMOBLOCKS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("pomoblocks-dev")
            } else {
                base_dir.join("pomoblocks")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
