use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init, list::list},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with error/warning counts
/// - `Err` if the command fails (e.g., invalid config, missing pages directory)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
