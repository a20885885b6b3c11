//! Workspace command handler.
//!
//! Shows which directory the device group commands operate on and the
//! settings found there.

use impdev_core::{CommandOutcome, WORKSPACE_FILE_NAME};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::workspace_summary;

/// Execute the workspace command.
///
/// A directory without settings is reported but is not an error.
pub async fn execute(ctx: &CliContext) -> Result<CommandOutcome, CliError> {
    let settings = ctx.workspace.workspace_data().await?;

    match settings {
        Some(config) => {
            ctx.ui
                .show_info(&workspace_summary(&ctx.workspace_dir, &config));
            Ok(CommandOutcome::Succeeded)
        }
        None => {
            ctx.ui.show_info(&format!(
                "{} is not a workspace (no {WORKSPACE_FILE_NAME})",
                ctx.workspace_dir.display()
            ));
            Ok(CommandOutcome::Skipped)
        }
    }
}
