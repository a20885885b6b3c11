//! Device-management service port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AccessToken, Device, DeviceGroupId, DeviceId};

/// Errors from device-management operations.
///
/// These are domain-level errors. Implementation-specific errors (HTTP, JSON)
/// are mapped to these by the adapter.
#[derive(Debug, Error)]
pub enum DevicePortError {
    /// The requested device does not exist. `message` is the service's text.
    #[error("{message}")]
    DeviceNotFound { device_id: String, message: String },

    /// The access token was refused.
    #[error("not authorized: {message}")]
    Unauthorized { message: String },

    /// The service understood the request but refused it.
    #[error("{message}")]
    Rejected { message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("invalid API response: {message}")]
    InvalidResponse { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

/// Result type alias for device port operations.
pub type DevicePortResult<T> = Result<T, DevicePortError>;

/// Port trait for the remote device-management service.
///
/// Every call is a single request authenticated with `token`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceApiPort: Send + Sync {
    /// Fetch a device.
    async fn get_device(&self, token: &AccessToken, device_id: &DeviceId)
    -> DevicePortResult<Device>;

    /// Assign devices to a device group.
    async fn add_devices(
        &self,
        token: &AccessToken,
        device_group_id: &DeviceGroupId,
        device_ids: &[DeviceId],
    ) -> DevicePortResult<()>;

    /// Unassign devices from a device group.
    ///
    /// `unassign_inactive` is forwarded to the service only when set.
    async fn remove_devices(
        &self,
        token: &AccessToken,
        device_group_id: &DeviceGroupId,
        unassign_inactive: Option<bool>,
        device_ids: &[DeviceId],
    ) -> DevicePortResult<()>;
}
