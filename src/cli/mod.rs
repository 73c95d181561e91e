//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod run;

pub use args::{Arguments, CheckCommand, Command, CommonArgs, UpdateCommand};

/// Exit conventions, following common linter-tool practice.
///
/// - `Success` (0): run completed, nothing to report
/// - `Failure` (1): run completed but coverage issues were found
/// - `Error` (2): run failed (missing project, transport failure, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
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

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
