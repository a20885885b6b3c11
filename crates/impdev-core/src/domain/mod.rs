//! Domain types for impdev.
//!
//! These are pure data types with no infrastructure dependencies.

mod device;
mod token;
mod workspace;

pub use device::{Device, DeviceGroupId, DeviceId};
pub use token::AccessToken;
pub use workspace::WorkspaceConfig;
