//! Common utilities for CLI tests.

use assert_cmd::Command;
use chrono::{Duration, Utc};
use pomoblocks_core::storage::TIMER_ENGINE_KEY;
use pomoblocks_core::{Database, KeyValueStore, SessionMode, TimerEngine};
use tempfile::TempDir;

/// An isolated data directory for one test.
pub struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.home.path()
    }

    /// The binary, pointed at this sandbox.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pomoblocks").expect("binary built");
        cmd.env("POMOBLOCKS_HOME", self.home.path())
            .env_remove("POMOBLOCKS_LOG");
        cmd
    }

    /// Persist a short countdown that was started `ago` and never ticked
    /// since, as if the process that started it had exited.
    pub fn seed_running_engine(&self, ago: Duration) {
        let db = Database::open_at(&self.home.path().join("pomoblocks.db")).expect("open db");
        let mut engine = TimerEngine::new(SessionMode::Short);
        engine.start_at(Utc::now() - ago);
        db.set_json(TIMER_ENGINE_KEY, &engine).expect("seed engine");
    }

    /// Run and expect success, returning stdout and stderr.
    pub fn run_with_stderr(&self, args: &[&str]) -> (String, String) {
        let output = self.cli().args(args).assert().success().get_output().clone();
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }

    /// Run and expect success, returning stdout.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.cli().args(args).assert().success().get_output().clone();
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

/// Parse JSON output from CLI.
pub fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}
