use clap::Subcommand;
use pomoblocks_core::session::{save, Draft, SaveOutcome, SessionLog};
use pomoblocks_core::{Config, Database, Event};
use serde::Serialize;

use super::timer::{load_engine, report_missed, save_engine};
use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum LogAction {
    /// Log the time worked in the current countdown
    Save {
        /// Block title
        #[arg(long, default_value = "")]
        title: String,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List logged blocks as JSON
    List,
    /// Per-day totals
    Summary,
}

#[derive(Serialize)]
struct DayRow {
    date: String,
    total_secs: i64,
    total: String,
    entries: usize,
}

pub fn run(action: LogAction) -> CmdResult {
    let db = Database::open()?;

    match action {
        LogAction::Save { title, notes } => {
            let config = Config::load_or_default();
            let (engine, missed) = load_engine(&db, &config);
            if let Some(event) = &missed {
                report_missed(event, &config)?;
            }
            let mut draft = Draft::new(title, notes);
            match save(&db, &engine, &mut draft)? {
                SaveOutcome::Saved(entry) => {
                    print_json(&Event::EntrySaved {
                        timestamp: entry.timestamp(),
                        duration_secs: entry.duration_secs(),
                        title: entry.title().to_string(),
                    })?;
                }
                SaveOutcome::NoActiveUser => {
                    eprintln!("not signed in: run `pomoblocks user login <email>` to log blocks");
                }
            }
            save_engine(&db, &engine)?;
        }
        LogAction::List => {
            let log = SessionLog::load(&db)?;
            print_json(&log)?;
        }
        LogAction::Summary => {
            let log = SessionLog::load(&db)?;
            let rows: Vec<DayRow> = log
                .daily_summaries()
                .into_iter()
                .map(|day| DayRow {
                    total: day.total_clock(),
                    date: day.label,
                    total_secs: day.total_secs,
                    entries: day.entries,
                })
                .collect();
            print_json(&rows)?;
        }
    }
    Ok(())
}
