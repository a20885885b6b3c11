//! Terminal helpers shared by the CLI adapter.

pub mod input;
