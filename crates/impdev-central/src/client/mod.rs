//! impCentral client.
//!
//! Generic over the HTTP backend so tests can inject a fake.

mod auth;
mod devices;

use url::Url;

use crate::config::CentralClientConfig;
use crate::error::CentralResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::CentralConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default impCentral client using the reqwest HTTP backend.
pub type DefaultCentralClient = CentralClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the impCentral API.
///
/// Use `DefaultCentralClient` in production code. The generic parameter `B`
/// is an implementation detail.
pub struct CentralClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: CentralConfig,
}

impl DefaultCentralClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &CentralClientConfig) -> CentralResult<Self> {
        let internal = CentralConfig {
            base_url: Url::parse(&config.base_url)?,
        };
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            config: internal,
        })
    }
}

impl<B: HttpBackend> CentralClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: CentralConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// The API base URL, used to tell stored credentials of different clouds apart.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }
}
