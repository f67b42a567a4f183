//! Audible completion signal.
//!
//! Playback problems never interrupt the caller: they are logged and
//! dropped.

use std::io::Write;

/// Something that can make a sound when a countdown completes.
pub trait Notifier {
    fn play(&mut self) -> std::io::Result<()>;
}

/// Rings the terminal bell on the wrapped writer.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl TerminalBell<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> Notifier for TerminalBell<W> {
    fn play(&mut self) -> std::io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

/// Play the completion sound if enabled. Returns whether it played.
pub fn signal_completion<N: Notifier + ?Sized>(notifier: &mut N, enabled: bool) -> bool {
    if !enabled {
        return false;
    }
    match notifier.play() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "completion sound failed");
            false
        }
    }
}
