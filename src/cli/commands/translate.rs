use crate::operations::{Operations, TranslationsArg};

use super::super::args::TranslateArgs;
use super::{CommandResult, CommandSummary};

pub fn translate(operations: &Operations, args: TranslateArgs) -> CommandResult {
    let file = args.file.to_string_lossy();
    let translations = TranslationsArg::Encoded(args.translations);
    CommandResult::from_outcome(
        "translate",
        operations.translate(&file, &translations),
        CommandSummary::Translate,
    )
}
