use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pomoblocks", version, about = "Pomoblocks CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Countdown control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Save and inspect logged blocks
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Local user session
    User {
        #[command(subcommand)]
        action: commands::user::UserAction,
    },
    /// Export logged blocks
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("POMOBLOCKS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Log { action } => commands::log::run(action),
        Commands::User { action } => commands::user::run(action),
        Commands::Export { action } => commands::export::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pomoblocks", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
