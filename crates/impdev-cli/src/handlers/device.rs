//! Device command handler.

use impdev_core::CommandOutcome;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::commands::DeviceCommand;

/// Execute a device subcommand.
pub async fn execute(ctx: &CliContext, command: DeviceCommand) -> CommandOutcome {
    debug!(?command, workspace = %ctx.workspace_dir.display(), "device command");
    match command {
        DeviceCommand::AgentUrl => ctx.devices.agent_url().await,
        DeviceCommand::Add => ctx.devices.add_device_to_group().await,
        DeviceCommand::Remove => ctx.devices.remove_device_from_group().await,
    }
}
