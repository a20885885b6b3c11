//! Login, logout and workspace commands.

mod common;

use std::fs;

use common::{WORKSPACE_DIR, harness};
use impdev_cli::{CliContext, CliError, Commands, handlers};
use impdev_core::testing::{RecordingDeviceApi, RecordingUi, StaticAuthorizer, StaticWorkspace};
use impdev_core::{CommandOutcome, FileWorkspace};
use std::sync::Arc;

#[tokio::test]
async fn login_reports_success() {
    let h = harness(
        StaticAuthorizer::granting("token-1"),
        StaticWorkspace::absent(),
        RecordingDeviceApi::new(),
        RecordingUi::new(),
    );

    let outcome = handlers::dispatch(&h.ctx, Commands::Login).await.unwrap();

    assert_eq!(outcome, CommandOutcome::Succeeded);
    assert_eq!(h.ui.infos().len(), 1);
    assert!(h.ui.errors().is_empty());
}

#[tokio::test]
async fn login_failure_is_reported() {
    let h = harness(
        StaticAuthorizer::failing("Invalid credentials"),
        StaticWorkspace::absent(),
        RecordingDeviceApi::new(),
        RecordingUi::new(),
    );

    let outcome = handlers::dispatch(&h.ctx, Commands::Login).await.unwrap();

    assert_eq!(outcome, CommandOutcome::Failed);
    assert!(h.ui.errors()[0].contains("Invalid credentials"));
}

#[tokio::test]
async fn logout_reports_success() {
    let h = harness(
        StaticAuthorizer::granting("token-1"),
        StaticWorkspace::absent(),
        RecordingDeviceApi::new(),
        RecordingUi::new(),
    );

    let outcome = handlers::dispatch(&h.ctx, Commands::Logout).await.unwrap();

    assert_eq!(outcome, CommandOutcome::Succeeded);
    assert_eq!(h.ui.infos().len(), 1);
}

#[tokio::test]
async fn workspace_shows_group() {
    let h = harness(
        StaticAuthorizer::granting("token-1"),
        StaticWorkspace::with_group("dg-1"),
        RecordingDeviceApi::new(),
        RecordingUi::new(),
    );

    let outcome = handlers::dispatch(&h.ctx, Commands::Workspace)
        .await
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Succeeded);
    let infos = h.ui.infos();
    assert!(infos[0].contains(WORKSPACE_DIR));
    assert!(infos[0].contains("dg-1"));
}

#[tokio::test]
async fn workspace_outside_is_skipped() {
    let h = harness(
        StaticAuthorizer::granting("token-1"),
        StaticWorkspace::absent(),
        RecordingDeviceApi::new(),
        RecordingUi::new(),
    );

    let outcome = handlers::dispatch(&h.ctx, Commands::Workspace)
        .await
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Skipped);
    assert!(h.ui.infos()[0].contains("not a workspace"));
}

#[tokio::test]
async fn workspace_with_malformed_settings_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("imp.config"), "{ not json").unwrap();

    let ui = Arc::new(RecordingUi::new());
    let ctx = CliContext::compose(
        Arc::new(StaticAuthorizer::granting("token-1")),
        Arc::new(FileWorkspace::new(dir.path())),
        Arc::new(RecordingDeviceApi::new()),
        ui.clone(),
        dir.path().to_path_buf(),
    );

    let err = handlers::dispatch(&ctx, Commands::Workspace)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::Workspace(_)));
    assert_eq!(err.exit_code(), 78);
    assert!(ui.notifications().is_empty());
}
