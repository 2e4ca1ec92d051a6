use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully, no issues found
/// - `Failure` (1): Command completed but found errors
/// - `Error` (2): Command failed due to internal error (config error, unreadable page, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no issues found.
    Success,
    /// Command completed but found errors.
    Failure,
    /// Command failed due to internal error (config error, unreadable page, etc.).
    Error,
}

impl ExitStatus {
    /// `Failure` when the command produced errors; warnings alone succeed.
    pub fn from_result(result: &CommandResult) -> Self {
        if result.error_count > 0 {
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
