//! Shared fixtures: a CLI context wired to recording fakes.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use impdev_cli::CliContext;
use impdev_core::testing::{RecordingDeviceApi, RecordingUi, StaticAuthorizer, StaticWorkspace};
use impdev_core::{AuthorizerPort, WorkspacePort};

pub const WORKSPACE_DIR: &str = "/work/blinkup";

pub struct Harness {
    pub ctx: CliContext,
    pub ui: Arc<RecordingUi>,
    pub api: Arc<RecordingDeviceApi>,
}

pub fn harness(
    auth: impl AuthorizerPort + 'static,
    workspace: impl WorkspacePort + 'static,
    api: RecordingDeviceApi,
    ui: RecordingUi,
) -> Harness {
    let ui = Arc::new(ui);
    let api = Arc::new(api);
    let ctx = CliContext::compose(
        Arc::new(auth),
        Arc::new(workspace),
        api.clone(),
        ui.clone(),
        PathBuf::from(WORKSPACE_DIR),
    );
    Harness { ctx, ui, api }
}

/// Logged in, inside workspace `dg-1`, answering `device_id` at the prompt.
pub fn in_workspace(device_id: Option<&str>, api: RecordingDeviceApi) -> Harness {
    harness(
        StaticAuthorizer::granting("token-1"),
        StaticWorkspace::with_group("dg-1"),
        api,
        RecordingUi::new().with_answer(device_id),
    )
}
