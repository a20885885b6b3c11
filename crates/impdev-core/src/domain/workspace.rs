//! Workspace configuration.

use serde::{Deserialize, Serialize};

use super::DeviceGroupId;

/// Per-workspace settings stored next to the project sources.
///
/// Read-only for the device commands; only `device_group_id` is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Device group the workspace deploys to.
    pub device_group_id: DeviceGroupId,
    /// Device code source file, relative to the workspace root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_file: Option<String>,
    /// Agent code source file, relative to the workspace root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_file: Option<String>,
}

impl WorkspaceConfig {
    pub fn new(device_group_id: DeviceGroupId) -> Self {
        Self {
            device_group_id,
            device_file: None,
            agent_file: None,
        }
    }
}
