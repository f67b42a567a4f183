//! Periodic one-second tick source.
//!
//! The ticker is a tokio task that only produces ticks; it never touches the
//! engine. Ticks are delivered over a channel to whoever owns the
//! [`TimerEngine`], so all state changes stay on that single owner.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::engine::TimerEngine;
use crate::events::Event;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running tick task. Dropping it without calling
/// [`Ticker::stop`] aborts the task.
pub struct Ticker {
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the tick task. The first tick arrives one `period` from now.
    pub fn start(period: Duration) -> (Self, mpsc::Receiver<Instant>) {
        let (tick_tx, tick_rx) = mpsc::channel(8);
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            // Late ticks are delivered in a burst so no second is lost.
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                let at = tokio::select! {
                    _ = &mut stop_rx => break,
                    at = interval.tick() => at,
                };
                // A full channel must not keep the stop signal from landing.
                tokio::select! {
                    _ = &mut stop_rx => break,
                    sent = tick_tx.send(at) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("ticker stopped");
        });

        (
            Self {
                stop_tx: Some(stop_tx),
                task,
            },
            tick_rx,
        )
    }

    /// Stop the task and wait for it to exit.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            tracing::warn!(error = %e, "ticker task ended abnormally");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if self.stop_tx.is_some() {
            self.task.abort();
        }
    }
}

/// Feed ticks into `engine` until the countdown completes, the engine is
/// stopped, or the tick channel closes. `on_tick` sees the engine after
/// every applied tick.
///
/// Returns the completion event if the countdown reached zero.
pub async fn drive<F>(
    engine: &mut TimerEngine,
    ticks: &mut mpsc::Receiver<Instant>,
    mut on_tick: F,
) -> Option<Event>
where
    F: FnMut(&TimerEngine),
{
    while engine.is_running() {
        ticks.recv().await?;
        let completed = engine.tick();
        on_tick(engine);
        if completed.is_some() {
            return completed;
        }
    }
    None
}
