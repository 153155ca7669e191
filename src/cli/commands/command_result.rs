use serde::Serialize;

use crate::error::{Error, ErrorResult};
use crate::operations::{LookUpResult, PoFilesResult, TranslateResult, UntranslatedTermsResult};

use super::super::exit_status::ExitStatus;

#[derive(Debug, Serialize)]
pub struct InitSummary {
    pub created: String,
}

#[derive(Debug)]
pub enum CommandSummary {
    Files(PoFilesResult),
    Untranslated(UntranslatedTermsResult),
    Lookup(LookUpResult),
    Translate(TranslateResult),
    Init(InitSummary),
    Failed(ErrorResult),
}

/// Result of running one CLI command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// Wrap an operation outcome, turning its error into a reportable summary.
    pub fn from_outcome<T>(
        command: &str,
        outcome: Result<T, Error>,
        summary: impl FnOnce(T) -> CommandSummary,
    ) -> Self {
        let summary = match outcome {
            Ok(value) => summary(value),
            Err(err) => {
                tracing::debug!(command, kind = err.kind(), "command failed: {}", err);
                CommandSummary::Failed(err.to_result())
            }
        };
        Self { summary }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Untranslated(result) => ExitStatus::for_untranslated(result.count),
            CommandSummary::Failed(_) => ExitStatus::Error,
            _ => ExitStatus::Success,
        }
    }
}
