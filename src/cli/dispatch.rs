//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::Commands;
use super::handlers::{handle_review, handle_scan, handle_suspicious};
use crate::exit::StrataExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<StrataExit> {
    match command {
        Commands::Scan { scan, json, strict } => handle_scan(&scan, json, strict),
        Commands::Review { scan, page } => handle_review(&scan, page),
        Commands::Suspicious { scan, json, strict } => handle_suspicious(&scan, json, strict),
    }
}
