use crate::operations::{NumericArg, Operations};

use super::super::args::LookupArgs;
use super::{CommandResult, CommandSummary};

pub fn lookup(operations: &Operations, args: LookupArgs) -> CommandResult {
    let file = args.file.to_string_lossy();
    let page = args.page.map(NumericArg::from);
    let page_size = args.page_size.map(NumericArg::from);
    CommandResult::from_outcome(
        "lookup",
        operations.look_up_translation(&file, &args.search_term, page_size.as_ref(), page.as_ref()),
        CommandSummary::Lookup,
    )
}
