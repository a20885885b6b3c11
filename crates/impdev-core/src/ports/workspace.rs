//! Workspace configuration reader port.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::WorkspaceConfig;

/// Errors from loading workspace configuration.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("cannot read workspace settings {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("malformed workspace settings {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("invalid workspace settings: {0}")]
    Invalid(String),
}

/// Port for reading the current workspace's configuration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspacePort: Send + Sync {
    /// Load the workspace configuration.
    ///
    /// Returns `Ok(None)` when the current directory is not a workspace.
    async fn workspace_data(&self) -> Result<Option<WorkspaceConfig>, WorkspaceError>;
}
