#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod messages;
pub mod paths;
pub mod ports;
pub mod services;
pub mod workspace;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{AccessToken, Device, DeviceGroupId, DeviceId, WorkspaceConfig};
pub use ports::{
    AuthError, AuthorizerPort, DeviceApiPort, DevicePortError, DevicePortResult,
    PromptRequest, UserInterfacePort, WorkspaceError, WorkspacePort,
};
pub use services::{CommandOutcome, DeviceService, SessionService};
pub use workspace::{FileWorkspace, WORKSPACE_FILE_NAME};

// Re-export path utilities
pub use paths::{PathError, auth_file_path, data_root, resolve_workspace_dir};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
