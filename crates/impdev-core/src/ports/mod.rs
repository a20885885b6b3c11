//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP or terminal types in any signature
//! - Collaborators are injected as `Arc<dyn Port>`, never reached as globals
//! - Every port error renders a message fit to show to the user verbatim

pub mod authorizer;
pub mod device_api;
pub mod user_interface;
pub mod workspace;

pub use authorizer::{AuthError, AuthorizerPort};
pub use device_api::{DeviceApiPort, DevicePortError, DevicePortResult};
pub use user_interface::{PromptRequest, UserInterfacePort};
pub use workspace::{WorkspaceError, WorkspacePort};
