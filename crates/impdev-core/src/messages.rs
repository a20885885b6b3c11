//! User-facing message text.
//!
//! Every string the device commands show lives here so adapters and tests
//! agree on the exact wording.

use crate::domain::{DeviceGroupId, DeviceId};

/// Prompt shown when asking for a device identifier.
pub const DEVICE_PROMPT_DEVICE_ID: &str = "Please enter the Device ID";

/// Prompts used by the interactive login.
pub const AUTH_PROMPT_LOGIN: &str = "impCentral login (email or username)";
pub const AUTH_PROMPT_PASSWORD: &str = "impCentral password";

/// Shown when the device identifier prompt is dismissed or left empty.
pub const DEVICE_ID_EMPTY: &str = "Device ID is empty.";

/// Prefix for authorization failures.
pub const AUTH_LOGIN: &str = "Login error:";
/// Shown when the user dismisses the login prompt.
pub const AUTH_CANCELLED: &str = "Login cancelled.";

pub const DEVICE_RETRIEVE: &str = "Cannot retrieve device:";
pub const DEVICE_ADD: &str = "Can not add device:";
pub const DEVICE_REMOVE: &str = "Cannot remove device:";
pub const WORKSPACE_LOAD: &str = "Cannot load workspace settings:";

pub const LOGIN_SUCCESS: &str = "Logged in to impCentral.";
pub const LOGOUT_SUCCESS: &str = "Logged out of impCentral.";

/// Join a fixed prefix with an upstream error's text.
pub fn with_reason(prefix: &str, reason: impl std::fmt::Display) -> String {
    format!("{prefix} {reason}")
}

pub fn device_added(device_id: &DeviceId, device_group_id: &DeviceGroupId) -> String {
    format!("The {device_id} is added to {device_group_id}")
}

pub fn device_removed(device_id: &DeviceId, device_group_id: &DeviceGroupId) -> String {
    format!("The {device_id} is removed from {device_group_id}")
}

pub fn no_agent_url(device_id: &DeviceId) -> String {
    format!("Device {device_id} has no agent URL")
}
