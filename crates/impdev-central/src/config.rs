//! Public configuration for the impCentral client.
//!
//! The internal config is derived from this.

use std::time::Duration;

/// Default impCentral API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.electricimp.com/v5";

/// Configuration for the impCentral client.
///
/// # Example
///
/// ```
/// use impdev_central::CentralClientConfig;
/// use std::time::Duration;
///
/// let config = CentralClientConfig::new()
///     .with_base_url("https://api.electricimp.com/v5")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct CentralClientConfig {
    /// Base URL for the impCentral API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for CentralClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("impdev/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CentralClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the impCentral API.
    ///
    /// Private clouds expose the same API under their own host.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
