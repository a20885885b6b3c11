//! Device and device group identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single device on the remote service.
///
/// A `DeviceId` is never empty: the only way to obtain one from user input is
/// [`DeviceId::parse`], which rejects absent and blank answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Parse a device identifier from raw prompt input.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` when the input is
    /// absent or blank.
    pub fn parse(input: Option<&str>) -> Option<Self> {
        let trimmed = input?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a device group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceGroupId(String);

impl DeviceGroupId {
    /// Create a device group identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is blank.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for DeviceGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A device as reported by the device-management service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: Option<String>,
    pub agent_id: Option<String>,
    /// Per-device agent endpoint. `None` when the device has no agent.
    pub agent_url: Option<String>,
    /// Group the device is currently assigned to, if any.
    pub device_group_id: Option<DeviceGroupId>,
}

impl Device {
    /// Create a device with only its identifier set.
    pub const fn new(id: DeviceId) -> Self {
        Self {
            id,
            name: None,
            agent_id: None,
            agent_url: None,
            device_group_id: None,
        }
    }

    #[must_use]
    pub fn with_agent_url(mut self, url: impl Into<String>) -> Self {
        self.agent_url = Some(url.into());
        self
    }
}
