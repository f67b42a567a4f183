//! Local user session.
//!
//! There is no authentication: whatever identifier is submitted becomes the
//! active user, and any password is dropped without being looked at or
//! stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::storage::{KeyValueStore, USER_SESSION_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Email or username, as typed.
    pub identifier: String,
    #[serde(default)]
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl UserSession {
    /// The persisted session, if any.
    pub fn current<S: KeyValueStore>(store: &S) -> Result<Option<Self>> {
        store.get_json(USER_SESSION_KEY)
    }

    /// Create and persist a session, replacing any previous one.
    pub fn login<S: KeyValueStore>(
        store: &S,
        identifier: &str,
        _password: Option<&str>,
    ) -> Result<Self> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(CoreError::InvalidInput {
                field: "identifier".into(),
                message: "must not be empty".into(),
            });
        }
        let session = Self {
            identifier: identifier.to_string(),
            signed_in_at: Some(Utc::now()),
        };
        store.set_json(USER_SESSION_KEY, &session)?;
        tracing::debug!(identifier, "user signed in");
        Ok(session)
    }

    /// Clear the persisted session. Logging out twice is fine.
    pub fn logout<S: KeyValueStore>(store: &S) -> Result<()> {
        store.remove(USER_SESSION_KEY)?;
        tracing::debug!("user signed out");
        Ok(())
    }
}
