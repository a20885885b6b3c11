//! Authorization provider port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AccessToken;

/// Errors from the authorization step.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The user dismissed the login prompt or left it empty.
    #[error("login was cancelled")]
    Cancelled,

    /// The service refused the credentials or could not be reached.
    #[error("{0}")]
    LoginFailed(String),

    /// Stored credentials could not be read or written.
    #[error("credential storage error: {0}")]
    Storage(String),
}

/// Port for obtaining an access token.
///
/// Implementations may reuse a cached token, refresh it, or run an
/// interactive login. Callers only see the final token or the failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizerPort: Send + Sync {
    /// Obtain a token valid for the next remote call.
    async fn authorize(&self) -> Result<AccessToken, AuthError>;

    /// Forget any stored credentials.
    async fn logout(&self) -> Result<(), AuthError>;
}
