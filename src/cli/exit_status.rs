use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of `tscat`.
///
/// - `Success` (0): no error-level issues (warnings alone never fail a run)
/// - `Failure` (1): a checking command found errors, or `init` could not write
/// - `Error` (2): the command could not run (bad config, unreadable catalog on clean)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
