//! Path resolution for impdev data and workspaces.

mod error;
mod platform;
#[cfg(test)]
pub(crate) mod test_utils;

use std::path::PathBuf;

pub use error::PathError;
pub use platform::data_root;

/// File holding stored impCentral credentials.
pub const AUTH_FILE_NAME: &str = "auth.info";

/// Location of the stored credentials file.
pub fn auth_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(AUTH_FILE_NAME))
}

/// Resolve the workspace directory a command operates on.
///
/// `None` means the current directory. `~` is expanded and relative paths
/// are made absolute.
pub fn resolve_workspace_dir(raw: Option<&str>) -> Result<PathBuf, PathError> {
    match raw {
        Some(path) => platform::normalize_user_path(path),
        None => std::env::current_dir().map_err(|e| PathError::CurrentDir(e.to_string())),
    }
}
