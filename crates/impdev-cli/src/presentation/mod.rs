//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no I/O and no domain decisions.

use std::path::Path;

use impdev_core::WorkspaceConfig;

/// `key = value` lines describing a workspace.
pub fn workspace_summary(dir: &Path, config: &WorkspaceConfig) -> String {
    [
        format!("workspace      = {}", dir.display()),
        format!("device_group   = {}", config.device_group_id),
        format!(
            "device_file    = {}",
            format_optional(config.device_file.as_deref())
        ),
        format!(
            "agent_file     = {}",
            format_optional(config.agent_file.as_deref())
        ),
    ]
    .join("\n")
}

/// Placeholder for settings that are not present.
pub fn format_optional(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
