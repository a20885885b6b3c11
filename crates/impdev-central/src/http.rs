//! HTTP backend abstraction for the impCentral API.
//!
//! The production implementation uses reqwest. Requests are sent exactly
//! once; error statuses are decoded into [`CentralError::Api`].

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::CentralClientConfig;
use crate::error::{CentralError, CentralResult};
use crate::models::ErrorDocument;

/// JSON:API media type used by the resource endpoints.
pub const JSON_API: &str = "application/vnd.api+json";
/// Plain JSON, used by the authentication endpoints.
pub const JSON: &str = "application/json";

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        })
    }
}

/// A single API request.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub media_type: &'static str,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub const fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            media_type: JSON_API,
            bearer: None,
            body: None,
        }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub const fn with_media_type(mut self, media_type: &'static str) -> Self {
        self.media_type = media_type;
        self
    }
}

// Keeps bearer tokens out of logs.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("media_type", &self.media_type)
            .field("authorized", &self.bearer.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the API.
///
/// Returns the decoded response body, or `Value::Null` for empty bodies
/// (`204 No Content`).
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(&self, request: ApiRequest) -> CentralResult<Value>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &CentralClientConfig) -> CentralResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    fn build_request(&self, request: &ApiRequest) -> CentralResult<reqwest::RequestBuilder> {
        let mut builder = match request.method {
            Method::Get => self.client.get(request.url.as_str()),
            Method::Post => self.client.post(request.url.as_str()),
            Method::Delete => self.client.delete(request.url.as_str()),
        }
        .header(ACCEPT, request.media_type);

        if let Some(ref token) = request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, request.media_type)
                .body(serde_json::to_vec(body)?);
        }
        Ok(builder)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: ApiRequest) -> CentralResult<Value> {
        debug!(method = %request.method, url = %request.url, "impCentral request");
        let response = self.build_request(&request)?.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), "impCentral response");

        if status.is_success() {
            return decode_body(&bytes);
        }

        Err(CentralError::Api {
            status: status.as_u16(),
            url: request.url.to_string(),
            message: error_message(&bytes)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "request failed".to_string()),
        })
    }
}

/// Decode a success body; empty bodies become `Value::Null`.
fn decode_body(bytes: &[u8]) -> CentralResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        Ok(Value::Null)
    } else {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Extract the service's error text from an error body.
fn error_message(bytes: &[u8]) -> Option<String> {
    if let Ok(doc) = serde_json::from_slice::<ErrorDocument>(bytes) {
        if let Some(summary) = doc.summary() {
            return Some(summary);
        }
    }
    let text = String::from_utf8_lossy(bytes).trim().to_string();
    if text.is_empty() || text.starts_with('{') || text.starts_with('<') {
        None
    } else {
        Some(text)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
