//! Workspace settings stored as JSON in the workspace root.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::WorkspaceConfig;
use crate::ports::{WorkspaceError, WorkspacePort};

/// Name of the settings file that marks a directory as a workspace.
pub const WORKSPACE_FILE_NAME: &str = "imp.config";

/// Reads `imp.config` from a workspace directory.
///
/// The file is read on every call so edits are picked up without restarting.
#[derive(Debug, Clone)]
pub struct FileWorkspace {
    root: PathBuf,
}

impl FileWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.root.join(WORKSPACE_FILE_NAME)
    }
}

#[async_trait]
impl WorkspacePort for FileWorkspace {
    async fn workspace_data(&self) -> Result<Option<WorkspaceConfig>, WorkspaceError> {
        let path = self.settings_path();
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no workspace settings");
                return Ok(None);
            }
            Err(e) => {
                return Err(WorkspaceError::Read {
                    path,
                    reason: e.to_string(),
                });
            }
        };

        let config: WorkspaceConfig =
            serde_json::from_str(&contents).map_err(|e| WorkspaceError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        if config.device_group_id.is_blank() {
            return Err(WorkspaceError::Invalid(
                "deviceGroupId must not be empty".to_string(),
            ));
        }

        debug!(device_group_id = %config.device_group_id, "loaded workspace settings");
        Ok(Some(config))
    }
}
