use std::process::ExitCode;

/// Process exit status of a CLI run.
///
/// `untranslated` doubles as a CI gate: it exits with
/// [`ExitStatus::UntranslatedFound`] while any term still lacks a msgstr.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    UntranslatedFound = 1,
    /// Bad arguments, unreadable or unwritable files, invalid config.
    Error = 2,
}

impl ExitStatus {
    /// Status for an untranslated-terms report with `count` terms.
    pub fn for_untranslated(count: usize) -> Self {
        if count == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::UntranslatedFound
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
