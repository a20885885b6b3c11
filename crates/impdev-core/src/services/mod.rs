//! Core services - the application's command layer.
//!
//! Services here are pure orchestrators over ports. They never return
//! errors: every failure is reported through the user interface and
//! summarized as a [`CommandOutcome`].

mod device_service;
mod outcome;
mod session_service;

pub use device_service::DeviceService;
pub use outcome::CommandOutcome;
pub use session_service::SessionService;
