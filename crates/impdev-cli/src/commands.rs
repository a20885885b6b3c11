//! Main commands enum and device subcommands.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Device lookups and device group membership
    Device {
        #[command(subcommand)]
        command: DeviceCommand,
    },

    /// Log in to impCentral and store the access token
    Login,

    /// Forget stored impCentral credentials
    Logout,

    /// Show the workspace directory and its device group
    Workspace,
}

/// Device subcommands. Each one prompts for the device ID.
#[derive(Subcommand, Debug)]
pub enum DeviceCommand {
    /// Show the agent URL of a device
    AgentUrl,

    /// Add a device to the workspace device group
    Add,

    /// Remove a device from the workspace device group
    Remove,
}
