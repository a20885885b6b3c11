//! Command outcome reported to adapters.

/// How a command ended.
///
/// The user has already been notified by the time an outcome is returned;
/// adapters only use it to choose an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The remote call succeeded.
    Succeeded,
    /// Nothing to do (no workspace settings).
    Skipped,
    /// The user supplied no input or dismissed a prompt.
    Aborted,
    /// Authorization, configuration or the remote call failed.
    Failed,
}

impl CommandOutcome {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Succeeded | Self::Skipped)
    }
}

/// Collapse an early-exit chain into its outcome.
pub(super) fn settle(result: Result<(), CommandOutcome>) -> CommandOutcome {
    match result {
        Ok(()) => CommandOutcome::Succeeded,
        Err(outcome) => outcome,
    }
}
