use crate::operations::Operations;

use super::super::args::FilesArgs;
use super::{CommandResult, CommandSummary};

pub fn files(operations: &Operations, args: FilesArgs) -> CommandResult {
    let directory = args.directory.to_string_lossy();
    CommandResult::from_outcome(
        "files",
        operations.list_po_files(&directory),
        CommandSummary::Files,
    )
}
