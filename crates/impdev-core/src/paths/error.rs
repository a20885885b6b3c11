//! Errors resolving the data directory and workspace paths.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// `~` was used but the home directory is unknown.
    #[error("Cannot expand '~': home directory is unknown")]
    NoHomeDir,

    #[error("Cannot determine a data directory for stored credentials; set IMPDEV_DATA_DIR")]
    NoDataDir,

    #[error("Cannot create data directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// `--workspace` was given an empty value.
    #[error("Workspace path is empty")]
    EmptyPath,

    #[error("Cannot determine current directory: {0}")]
    CurrentDir(String),
}
