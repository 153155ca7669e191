use crate::operations::{NumericArg, Operations};

use super::super::args::UntranslatedArgs;
use super::{CommandResult, CommandSummary};

pub fn untranslated(operations: &Operations, args: UntranslatedArgs) -> CommandResult {
    let file = args.file.to_string_lossy();
    let limit = args.limit.map(NumericArg::from);
    CommandResult::from_outcome(
        "untranslated",
        operations.get_untranslated_terms(&file, limit.as_ref()),
        CommandSummary::Untranslated,
    )
}
