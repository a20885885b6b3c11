//! Storage for impCentral credentials between runs.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use impdev_core::AuthError;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// A stored token is reused only if it stays valid at least this long.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Credentials persisted after a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAuth {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// API base URL the token was issued by.
    pub cloud_url: String,
}

impl StoredAuth {
    /// Whether the access token can still be used at `now`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - Duration::seconds(EXPIRY_MARGIN_SECS) > now
    }
}

impl fmt::Debug for StoredAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredAuth")
            .field("expires_at", &self.expires_at)
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("cloud_url", &self.cloud_url)
            .finish_non_exhaustive()
    }
}

/// Where [`StoredAuth`] lives between runs.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Load stored credentials; `None` if there are none.
    async fn load(&self) -> Result<Option<StoredAuth>, AuthError>;

    async fn save(&self, auth: &StoredAuth) -> Result<(), AuthError>;

    /// Remove stored credentials. Succeeds when there were none.
    async fn clear(&self) -> Result<(), AuthError>;
}

// ============================================================================
// File store
// ============================================================================

/// Keeps credentials as JSON in a single file (`auth.info`).
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn storage_error(&self, e: &std::io::Error) -> AuthError {
        AuthError::Storage(format!("{}: {e}", self.path.display()))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<StoredAuth>, AuthError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.storage_error(&e)),
        };

        match serde_json::from_str(&contents) {
            Ok(auth) => Ok(Some(auth)),
            Err(e) => {
                // A corrupt file only forces a fresh login.
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable credentials");
                Ok(None)
            }
        }
    }

    async fn save(&self, auth: &StoredAuth) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error(&e))?;
        }

        let json = serde_json::to_string_pretty(auth)
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options
            .open(&self.path)
            .await
            .map_err(|e| self.storage_error(&e))?;

        // `mode` only applies to new files; tighten an existing one before
        // any token is written to it.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| self.storage_error(&e))?;
        }

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| self.storage_error(&e))?;
        file.flush().await.map_err(|e| self.storage_error(&e))?;

        debug!(path = %self.path.display(), "stored credentials");
        Ok(())
    }

    async fn clear(&self) -> Result<(), AuthError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error(&e)),
        }
    }
}

// ============================================================================
// Memory store
// ============================================================================

/// Keeps credentials for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    auth: Mutex<Option<StoredAuth>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth(auth: StoredAuth) -> Self {
        Self {
            auth: Mutex::new(Some(auth)),
        }
    }

    /// Snapshot of the stored credentials.
    pub fn current(&self) -> Option<StoredAuth> {
        self.auth
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn set(&self, auth: Option<StoredAuth>) {
        *self
            .auth
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = auth;
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<StoredAuth>, AuthError> {
        Ok(self.current())
    }

    async fn save(&self, auth: &StoredAuth) -> Result<(), AuthError> {
        self.set(Some(auth.clone()));
        Ok(())
    }

    async fn clear(&self) -> Result<(), AuthError> {
        self.set(None);
        Ok(())
    }
}
