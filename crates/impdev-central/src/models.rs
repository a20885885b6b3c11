//! Internal API types for impCentral.
//!
//! These types are internal to `impdev-central`. External consumers use the
//! domain types defined in `impdev-core`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::DEFAULT_BASE_URL;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the impCentral client.
#[derive(Debug, Clone)]
pub struct CentralConfig {
    /// Base URL for the API, always without a trailing slash in its path
    pub base_url: Url,
}

impl Default for CentralConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default impCentral URL is valid"),
        }
    }
}

// ============================================================================
// JSON:API resources
// ============================================================================

/// JSON:API resource type names.
pub const TYPE_DEVICE: &str = "device";

/// `{ "type": ..., "id": ... }` reference to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn device(id: &str) -> Self {
        Self {
            kind: TYPE_DEVICE.to_string(),
            id: id.to_string(),
        }
    }
}

/// Body of relationship-changing requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipBody {
    pub data: Vec<ResourceIdentifier>,
}

/// Top-level document returned by `GET /devices/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceDocument {
    pub data: DeviceResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceResource {
    pub id: String,
    #[serde(default)]
    pub attributes: DeviceAttributes,
    #[serde(default)]
    pub relationships: DeviceRelationships,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceAttributes {
    pub name: Option<String>,
    pub agent_id: Option<String>,
    pub agent_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceRelationships {
    pub devicegroup: Option<ToOneRelationship>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToOneRelationship {
    pub data: Option<ResourceIdentifier>,
}

// ============================================================================
// Errors
// ============================================================================

/// JSON:API error document.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDocument {
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorObject {
    pub code: Option<String>,
    pub title: Option<String>,
    pub detail: Option<String>,
}

impl ErrorDocument {
    /// Join the human-readable parts of all errors.
    ///
    /// Prefers `detail`, then `title`, then `code`. Returns `None` when no
    /// error carries any text.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| {
                e.detail
                    .as_deref()
                    .or(e.title.as_deref())
                    .or(e.code.as_deref())
            })
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Body of `POST /auth`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub id: &'a str,
    pub password: &'a str,
    /// Ask for a refresh token alongside the access token.
    pub longlived: bool,
}

/// Body of `POST /auth/token`.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest<'a> {
    pub token: &'a str,
}

/// Successful authentication response.
///
/// Accounts with two-factor login get a `login_token` instead of an access
/// token; that flow is surfaced as an error by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    /// Lifetime in seconds, used when `expires_at` is missing.
    pub expires_in: Option<i64>,
    pub refresh_token: Option<String>,
    pub login_token: Option<String>,
}

/// A usable access token extracted from a [`TokenResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub refresh_token: Option<String>,
}
