use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Session length mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// 25 minutes.
    #[default]
    Short,
    /// 50 minutes.
    Long,
}

impl SessionMode {
    pub const SHORT_SECS: u64 = 1500;
    pub const LONG_SECS: u64 = 3000;

    /// Full countdown length in seconds.
    pub fn full_secs(self) -> u64 {
        match self {
            SessionMode::Short => Self::SHORT_SECS,
            SessionMode::Long => Self::LONG_SECS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionMode::Short => "short",
            SessionMode::Long => "long",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" | "25" => Ok(SessionMode::Short),
            "long" | "50" => Ok(SessionMode::Long),
            other => Err(format!("unknown session mode '{other}' (expected short or long)")),
        }
    }
}
