//! Authorization provider backed by impCentral.
//!
//! Order of attempts: a stored access token that is still fresh, then the
//! stored refresh token, then a login with a login name and password.

mod store;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use impdev_core::messages::{AUTH_PROMPT_LOGIN, AUTH_PROMPT_PASSWORD};
use impdev_core::{AccessToken, AuthError, AuthorizerPort, PromptRequest, UserInterfacePort};
use tracing::{debug, info, warn};

pub use store::{FileTokenStore, MemoryTokenStore, StoredAuth, TokenStore};

use crate::client::CentralClient;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::TokenGrant;

/// Authorizer using the reqwest-backed client.
pub type DefaultCentralAuthorizer = CentralAuthorizer<ReqwestBackend>;

/// impCentral login name (email or username) and password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// Implements [`AuthorizerPort`] against impCentral.
///
/// Login and password are asked through the user interface unless preset
/// (for non-interactive use). Every new token is written to the store.
pub struct CentralAuthorizer<B: HttpBackend> {
    client: Arc<CentralClient<B>>,
    store: Arc<dyn TokenStore>,
    ui: Arc<dyn UserInterfacePort>,
    login: Option<String>,
    password: Option<String>,
}

impl<B: HttpBackend> CentralAuthorizer<B> {
    pub fn new(
        client: Arc<CentralClient<B>>,
        store: Arc<dyn TokenStore>,
        ui: Arc<dyn UserInterfacePort>,
    ) -> Self {
        Self {
            client,
            store,
            ui,
            login: None,
            password: None,
        }
    }

    /// Use this login name instead of prompting for it.
    #[must_use]
    pub fn with_login(mut self, login: Option<String>) -> Self {
        self.login = login.filter(|l| !l.trim().is_empty());
        self
    }

    /// Use this password instead of prompting for it.
    #[must_use]
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password.filter(|p| !p.is_empty());
        self
    }

    fn cloud_url(&self) -> String {
        self.client.base_url().to_string()
    }

    /// Try the stored token, then the stored refresh token.
    async fn from_store(&self) -> Result<Option<AccessToken>, AuthError> {
        let cloud_url = self.cloud_url();
        let Some(stored) = self.store.load().await? else {
            return Ok(None);
        };
        if stored.cloud_url != cloud_url {
            debug!(stored = %stored.cloud_url, "stored credentials belong to another cloud");
            return Ok(None);
        }

        if stored.is_fresh_at(Utc::now()) {
            debug!("using stored access token");
            return Ok(Some(AccessToken::new(stored.access_token)));
        }

        let Some(refresh_token) = stored.refresh_token else {
            return Ok(None);
        };
        match self.client.refresh(&refresh_token).await {
            Ok(grant) => {
                debug!("refreshed access token");
                self.remember(grant, Some(refresh_token)).await.map(Some)
            }
            Err(e) => {
                warn!(error = %e, "token refresh failed, logging in again");
                Ok(None)
            }
        }
    }

    async fn credentials(&self) -> Result<Credentials, AuthError> {
        let login = match &self.login {
            Some(login) => login.clone(),
            None => self
                .ask(PromptRequest::new(AUTH_PROMPT_LOGIN))
                .await?
                .trim()
                .to_string(),
        };
        let password = match &self.password {
            Some(password) => password.clone(),
            None => self.ask(PromptRequest::secret(AUTH_PROMPT_PASSWORD)).await?,
        };
        Ok(Credentials { login, password })
    }

    async fn ask(&self, request: PromptRequest) -> Result<String, AuthError> {
        self.ui
            .input_box(&request)
            .await
            .filter(|answer| !answer.trim().is_empty())
            .ok_or(AuthError::Cancelled)
    }

    /// Store a new grant and hand out its token.
    ///
    /// A grant without a refresh token keeps the previous one.
    async fn remember(
        &self,
        grant: TokenGrant,
        previous_refresh_token: Option<String>,
    ) -> Result<AccessToken, AuthError> {
        let stored = StoredAuth {
            access_token: grant.access_token.clone(),
            expires_at: grant.expires_at,
            refresh_token: grant.refresh_token.or(previous_refresh_token),
            cloud_url: self.cloud_url(),
        };
        if let Err(e) = self.store.save(&stored).await {
            // The token is still valid for this run.
            warn!(error = %e, "could not store credentials");
        }
        Ok(AccessToken::new(grant.access_token))
    }
}

#[async_trait]
impl<B: HttpBackend> AuthorizerPort for CentralAuthorizer<B> {
    async fn authorize(&self) -> Result<AccessToken, AuthError> {
        if let Some(token) = self.from_store().await? {
            return Ok(token);
        }

        let credentials = self.credentials().await?;
        let grant = self
            .client
            .login(&credentials)
            .await
            .map_err(|e| AuthError::LoginFailed(e.to_string()))?;
        info!(login = %credentials.login, "logged in to impCentral");
        self.remember(grant, None).await
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.store.clear().await
    }
}
