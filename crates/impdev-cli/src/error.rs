//! CLI-specific error types and mappings.
//!
//! Device commands report their own failures and end with a
//! [`CommandOutcome`]; [`CliError`] covers what goes wrong around them
//! (bad paths, an unusable API URL, unreadable workspace settings).

use impdev_central::CentralError;
use impdev_core::{CommandOutcome, PathError, WorkspaceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The workspace or data directory could not be resolved.
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// The impCentral client could not be built (usually a bad `--api-url`).
    #[error("impCentral client: {0}")]
    Client(#[from] CentralError),

    /// `imp.config` exists but cannot be used.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 2: Misuse of shell command (an empty `--workspace`)
    /// - 78: Configuration error (EX_CONFIG)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Path(PathError::EmptyPath) => 2,
            Self::Path(_) | Self::Client(_) | Self::Workspace(_) => 78,
        }
    }
}

/// Exit status for a finished command.
pub const fn outcome_exit_code(outcome: CommandOutcome) -> i32 {
    match outcome {
        CommandOutcome::Succeeded | CommandOutcome::Skipped => 0,
        CommandOutcome::Failed => 1,
        CommandOutcome::Aborted => 2,
    }
}
