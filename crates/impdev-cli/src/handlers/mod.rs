//! Command handlers that delegate to the core services.
//!
//! Handlers are thin: they pick the service operation for a subcommand and
//! return how it ended. User-facing output is produced by the services
//! through the user interface port, except for `workspace`, which only
//! formats local settings.

pub mod device;
pub mod session;
pub mod workspace;

use impdev_core::CommandOutcome;

use crate::bootstrap::CliContext;
use crate::commands::Commands;
use crate::error::CliError;

/// Run one parsed command.
pub async fn dispatch(ctx: &CliContext, command: Commands) -> Result<CommandOutcome, CliError> {
    match command {
        Commands::Device { command } => Ok(device::execute(ctx, command).await),
        Commands::Login => Ok(session::login(ctx).await),
        Commands::Logout => Ok(session::logout(ctx).await),
        Commands::Workspace => workspace::execute(ctx).await,
    }
}
