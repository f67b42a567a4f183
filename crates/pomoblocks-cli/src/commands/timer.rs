use chrono::Utc;
use clap::Subcommand;
use pomoblocks_core::notify::{signal_completion, TerminalBell};
use pomoblocks_core::storage::TIMER_ENGINE_KEY;
use pomoblocks_core::timer::{format_mm_ss, ticker, Ticker, TICK_PERIOD};
use pomoblocks_core::{Config, Database, Event, KeyValueStore, SessionMode, TimerEngine};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or continue the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Stop and refill the countdown
    Reset,
    /// Switch session length (short = 25 min, long = 50 min)
    Mode {
        mode: SessionMode,
    },
    /// Print current timer state as JSON
    Status,
    /// Run the countdown in the foreground until it completes
    Run,
}

/// Restore the engine and apply the seconds that passed since it was saved.
///
/// Returns the engine and the completion event if the countdown finished
/// while nobody was watching.
pub(crate) fn load_engine(db: &Database, config: &Config) -> (TimerEngine, Option<Event>) {
    let mut engine = match db.get_json::<TimerEngine>(TIMER_ENGINE_KEY) {
        Ok(Some(engine)) => engine,
        Ok(None) => TimerEngine::new(config.timer.default_mode),
        Err(e) => {
            tracing::warn!(error = %e, "could not read saved timer, starting fresh");
            TimerEngine::new(config.timer.default_mode)
        }
    };
    let completed = engine.catch_up(Utc::now());
    (engine, completed)
}

pub(crate) fn save_engine(db: &Database, engine: &TimerEngine) -> CmdResult {
    db.set_json(TIMER_ENGINE_KEY, engine)?;
    Ok(())
}

fn ring(event: &Event, config: &Config) {
    if event.is_completion() {
        signal_completion(&mut TerminalBell::stderr(), config.notifications.sound_enabled);
    }
}

/// Report a completion that happened between invocations.
///
/// Written as one compact JSON line on stderr so that stdout keeps a single
/// document for the command's own result.
pub(crate) fn report_missed(event: &Event, config: &Config) -> CmdResult {
    eprintln!("{}", serde_json::to_string(event)?);
    ring(event, config);
    Ok(())
}

pub fn run(action: TimerAction) -> CmdResult {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let (mut engine, missed) = load_engine(&db, &config);
    if let Some(event) = &missed {
        report_missed(event, &config)?;
    }

    match action {
        TimerAction::Start => match engine.start() {
            Some(event) => print_json(&event)?,
            None => print_json(&engine.snapshot())?,
        },
        TimerAction::Pause => match engine.pause() {
            Some(event) => print_json(&event)?,
            None => print_json(&engine.snapshot())?,
        },
        TimerAction::Reset => {
            if let Some(event) = engine.reset() {
                print_json(&event)?;
            }
        }
        TimerAction::Mode { mode } => {
            if let Some(event) = engine.set_mode(mode) {
                print_json(&event)?;
            }
        }
        TimerAction::Status => print_json(&engine.snapshot())?,
        TimerAction::Run => {
            run_foreground(&db, &config, &mut engine)?;
        }
    }

    save_engine(&db, &engine)?;
    Ok(())
}

/// Count down on a ticker, persisting after every second so that other
/// invocations (`timer status`, `log save`) see live progress.
fn run_foreground(db: &Database, config: &Config, engine: &mut TimerEngine) -> CmdResult {
    if let Some(event) = engine.start() {
        print_json(&event)?;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let completed = runtime.block_on(async {
        let (ticker, mut ticks) = Ticker::start(TICK_PERIOD);
        let completed = ticker::drive(engine, &mut ticks, |engine| {
            eprint!("\r{} ", format_mm_ss(engine.remaining_secs() as i64));
            if let Err(e) = db.set_json(TIMER_ENGINE_KEY, engine) {
                tracing::warn!(error = %e, "could not persist timer");
            }
        })
        .await;
        ticker.stop().await;
        completed
    });
    eprintln!();

    if let Some(event) = completed {
        print_json(&event)?;
        ring(&event, config);
    }
    Ok(())
}
