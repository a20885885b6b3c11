//! Platform-specific path resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data directory.
pub(super) const DATA_DIR_ENV: &str = "IMPDEV_DATA_DIR";

/// Get the root directory for application data (stored credentials).
///
/// Resolution order:
/// 1. `IMPDEV_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/impdev`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    let root = data_dir.join("impdev");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDir(e.to_string()))
    }
}
