#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultCentralClient is meant to be used through the DeviceApiPort trait,
// not its internal generic structure
#![allow(private_interfaces, private_bounds)]

mod auth;
mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCentralClient;

// Authorization
pub use auth::{
    CentralAuthorizer, Credentials, DefaultCentralAuthorizer, FileTokenStore, MemoryTokenStore,
    StoredAuth, TokenStore,
};

// Configuration
pub use config::CentralClientConfig;

// Errors
pub use error::{CentralError, CentralResult};
