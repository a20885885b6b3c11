//! Authentication endpoints.

use chrono::{Duration, Utc};

use super::CentralClient;
use crate::auth::Credentials;
use crate::error::{CentralError, CentralResult};
use crate::http::{ApiRequest, HttpBackend, JSON, Method};
use crate::models::{LoginRequest, RefreshRequest, TokenGrant, TokenResponse};
use crate::url::{build_login_url, build_refresh_url};

impl<B: HttpBackend> CentralClient<B> {
    /// Exchange a login and password for an access token.
    pub(crate) async fn login(&self, credentials: &Credentials) -> CentralResult<TokenGrant> {
        let body = serde_json::to_value(LoginRequest {
            id: &credentials.login,
            password: &credentials.password,
            longlived: true,
        })?;
        let request = ApiRequest::new(Method::Post, build_login_url(&self.config))
            .with_media_type(JSON)
            .with_body(body);
        let json = self.backend.send(request).await?;
        to_grant(serde_json::from_value(json)?)
    }

    /// Exchange a refresh token for a new access token.
    pub(crate) async fn refresh(&self, refresh_token: &str) -> CentralResult<TokenGrant> {
        let body = serde_json::to_value(RefreshRequest {
            token: refresh_token,
        })?;
        let request = ApiRequest::new(Method::Post, build_refresh_url(&self.config))
            .with_media_type(JSON)
            .with_body(body);
        let json = self.backend.send(request).await?;
        to_grant(serde_json::from_value(json)?)
    }
}

fn to_grant(response: TokenResponse) -> CentralResult<TokenGrant> {
    let Some(access_token) = response.access_token else {
        let message = if response.login_token.is_some() {
            "two-factor login is not supported"
        } else {
            "missing access_token"
        };
        return Err(CentralError::InvalidResponse {
            message: message.to_string(),
        });
    };

    let expires_at = response.expires_at.unwrap_or_else(|| {
        Utc::now() + Duration::seconds(response.expires_in.unwrap_or_default())
    });

    Ok(TokenGrant {
        access_token,
        expires_at,
        refresh_token: response.refresh_token,
    })
}
