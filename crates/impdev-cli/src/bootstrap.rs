//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - impCentral client and authorizer (via impdev-central)
//! - Workspace settings reader and core services (via impdev-core)
//! - Terminal user interface
//!
//! Command handlers receive the composed [`CliContext`].

use std::path::PathBuf;
use std::sync::Arc;

use impdev_central::{
    CentralClientConfig, DefaultCentralAuthorizer, DefaultCentralClient, FileTokenStore,
};
use impdev_core::{
    AuthorizerPort, DeviceApiPort, DeviceService, FileWorkspace, SessionService, UserInterfacePort,
    WorkspacePort, auth_file_path, resolve_workspace_dir,
};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;
use crate::terminal_ui::TerminalUi;

/// Bootstrap configuration for the CLI.
#[derive(Clone)]
pub struct CliConfig {
    /// Directory holding `imp.config`.
    pub workspace_dir: PathBuf,
    /// Stored credentials file.
    pub auth_file: PathBuf,
    /// API base URL override.
    pub api_url: Option<String>,
    /// Preset login.
    pub user: Option<String>,
    /// Preset password.
    pub password: Option<String>,
}

impl CliConfig {
    /// Resolve paths and credentials from the parsed arguments.
    ///
    /// clap has already merged the `IMPDEV_*` environment variables (and any
    /// `.env` file loaded before parsing).
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(Self {
            workspace_dir: resolve_workspace_dir(cli.workspace.as_deref())?,
            auth_file: auth_file_path()?,
            api_url: cli.api_url.clone().filter(|url| !url.trim().is_empty()),
            user: cli.user.clone(),
            password: cli.password.clone(),
        })
    }

    fn client_config(&self) -> CentralClientConfig {
        match &self.api_url {
            Some(url) => CentralClientConfig::new().with_base_url(url.trim()),
            None => CentralClientConfig::new(),
        }
    }
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("workspace_dir", &self.workspace_dir)
            .field("auth_file", &self.auth_file)
            .field("api_url", &self.api_url)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Device commands.
    pub devices: DeviceService,
    /// Login and logout.
    pub session: SessionService,
    /// Workspace settings reader.
    pub workspace: Arc<dyn WorkspacePort>,
    /// Resolved workspace directory.
    pub workspace_dir: PathBuf,
    /// Where command output goes.
    pub ui: Arc<dyn UserInterfacePort>,
}

impl CliContext {
    /// Assemble a context from already-built adapters.
    pub fn compose(
        auth: Arc<dyn AuthorizerPort>,
        workspace: Arc<dyn WorkspacePort>,
        devices: Arc<dyn DeviceApiPort>,
        ui: Arc<dyn UserInterfacePort>,
        workspace_dir: PathBuf,
    ) -> Self {
        Self {
            devices: DeviceService::new(auth.clone(), workspace.clone(), devices, ui.clone()),
            session: SessionService::new(auth, ui.clone()),
            workspace,
            workspace_dir,
            ui,
        }
    }
}

/// Bootstrap the CLI application.
///
/// Builds the impCentral client, the authorizer backed by the credentials
/// file, the workspace reader and the terminal UI, then hands them to the
/// core services.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    debug!(?config, "bootstrapping");

    let ui: Arc<dyn UserInterfacePort> = Arc::new(TerminalUi::new());
    let client = Arc::new(DefaultCentralClient::new(&config.client_config())?);
    let store = Arc::new(FileTokenStore::new(config.auth_file.clone()));
    let auth = DefaultCentralAuthorizer::new(client.clone(), store, ui.clone())
        .with_login(config.user.clone())
        .with_password(config.password.clone());
    let workspace = Arc::new(FileWorkspace::new(config.workspace_dir.clone()));

    Ok(CliContext::compose(
        Arc::new(auth),
        workspace,
        client,
        ui,
        config.workspace_dir,
    ))
}
