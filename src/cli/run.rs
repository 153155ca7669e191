use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, files::files, init::init, lookup::lookup, translate::translate,
        untranslated::untranslated,
    },
};
use crate::operations::Operations;
use anyhow::Result;

/// Dispatch a parsed command line to its command handler.
///
/// Operation failures (missing file, bad payload, ...) come back inside the
/// [`CommandResult`]; only setup failures such as an unreadable config file
/// are returned as `Err`.
pub fn run(Arguments { command, .. }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Files(cmd)) => Ok(files(&Operations::from_current_dir()?, cmd)),
        Some(Command::Untranslated(cmd)) => {
            Ok(untranslated(&Operations::from_current_dir()?, cmd))
        }
        Some(Command::Lookup(cmd)) => Ok(lookup(&Operations::from_current_dir()?, cmd)),
        Some(Command::Translate(cmd)) => Ok(translate(&Operations::from_current_dir()?, cmd)),
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
