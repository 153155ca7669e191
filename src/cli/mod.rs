//! Command-line interface layer.
//!
//! Each subcommand runs one catalog operation and reports its result either
//! as a human-readable summary or, with `--json`, as the same JSON object the
//! MCP tools return.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let json = args.json;

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, json);

    Ok(result.exit_status())
}
