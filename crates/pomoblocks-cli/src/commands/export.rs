use std::path::PathBuf;

use clap::Subcommand;
use pomoblocks_core::export::{download, open_url, to_markdown};
use pomoblocks_core::{Config, Database, ExportTarget, FileFormat, SessionLog};

use super::CmdResult;

#[derive(Subcommand)]
pub enum ExportAction {
    /// CSV export (stdout, or pomodoro_blocks.csv in --out)
    Csv {
        /// Directory to write the file into
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Markdown export (stdout, or pomodoro_blocks.md in --out)
    Markdown {
        /// Directory to write the file into
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Hand the Markdown export to a note app
    Open {
        /// obsidian, bear or drafts (defaults to export.default_target)
        target: Option<String>,
        /// Print the URL instead of opening it
        #[arg(long)]
        print: bool,
    },
}

fn emit(log: &SessionLog, format: FileFormat, out: Option<PathBuf>) -> CmdResult {
    match out {
        Some(dir) => {
            let path = download(log.entries(), format, &dir)?;
            println!("{}", path.display());
        }
        None => {
            let text = format.render(log.entries())?;
            if text.is_empty() || text.ends_with('\n') {
                print!("{text}");
            } else {
                println!("{text}");
            }
        }
    }
    Ok(())
}

pub fn run(action: ExportAction) -> CmdResult {
    let db = Database::open()?;
    let log = SessionLog::load(&db)?;

    match action {
        ExportAction::Csv { out } => emit(&log, FileFormat::Csv, out)?,
        ExportAction::Markdown { out } => emit(&log, FileFormat::Markdown, out)?,
        ExportAction::Open { target, print } => {
            let config = Config::load_or_default();
            let target = match target {
                Some(name) => name.parse::<ExportTarget>()?,
                None => config.export.default_target,
            };
            let url = target.url_for(&to_markdown(log.entries()));
            if print || !config.export.open_urls {
                println!("{url}");
            } else {
                open_url(&url)?;
                println!("opened {target} with {} block(s)", log.len());
            }
        }
    }
    Ok(())
}
