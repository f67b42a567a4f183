use clap::Subcommand;
use pomoblocks_core::{Database, UserSession};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum UserAction {
    /// Sign in locally. Credentials are not verified.
    Login {
        /// Email or username
        identifier: String,
        /// Accepted for compatibility; never stored
        #[arg(long)]
        password: Option<String>,
    },
    /// Clear the local session
    Logout,
    /// Show the signed-in user
    Status,
}

pub fn run(action: UserAction) -> CmdResult {
    let db = Database::open()?;

    match action {
        UserAction::Login {
            identifier,
            password,
        } => {
            let session = UserSession::login(&db, &identifier, password.as_deref())?;
            println!("signed in as {}", session.identifier);
        }
        UserAction::Logout => {
            UserSession::logout(&db)?;
            println!("signed out");
        }
        UserAction::Status => match UserSession::current(&db)? {
            Some(session) => print_json(&session)?,
            None => println!("not signed in"),
        },
    }
    Ok(())
}
