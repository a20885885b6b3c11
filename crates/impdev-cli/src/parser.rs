//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for impCentral device groups.
///
/// Global options select the workspace and the impCentral account; the
/// subcommand picks the operation.
#[derive(Parser)]
#[command(name = "impdev")]
#[command(about = "Manage impCentral devices and device groups")]
#[command(version)]
pub struct Cli {
    /// Workspace directory holding imp.config (defaults to the current directory)
    #[arg(short = 'w', long = "workspace", global = true)]
    pub workspace: Option<String>,

    /// impCentral API base URL
    #[arg(long = "api-url", env = "IMPDEV_API_URL", global = true)]
    pub api_url: Option<String>,

    /// impCentral login, used instead of prompting
    #[arg(long = "user", env = "IMPDEV_USER", global = true)]
    pub user: Option<String>,

    /// impCentral password, used instead of prompting
    #[arg(
        long = "password",
        env = "IMPDEV_PASSWORD",
        global = true,
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
