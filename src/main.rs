use std::process::ExitCode;

use clap::Parser;
use i18n_mcp::cli::{Arguments, Command, ExitStatus};
use i18n_mcp::operations::Operations;

fn main() -> ExitCode {
    let args = Arguments::parse();
    i18n_mcp::logging::init(args.verbose);

    if matches!(args.command, Some(Command::Serve)) {
        let served = Operations::from_current_dir().and_then(i18n_mcp::mcp::run_server);
        if let Err(err) = served {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match i18n_mcp::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
