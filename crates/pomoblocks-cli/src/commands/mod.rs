pub mod config;
pub mod export;
pub mod log;
pub mod timer;
pub mod user;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
