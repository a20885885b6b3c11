//! Device commands: agent URL lookup and device group membership.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::outcome::{CommandOutcome, settle};
use crate::domain::{AccessToken, DeviceGroupId, DeviceId};
use crate::messages;
use crate::ports::{
    AuthError, AuthorizerPort, DeviceApiPort, PromptRequest, UserInterfacePort, WorkspacePort,
};

/// Runs the device commands against injected collaborators.
///
/// Each command is a straight sequence: authorize, read the workspace
/// (group commands only), prompt for a device ID, make one remote call,
/// notify. The first failing step notifies the user and ends the command.
pub struct DeviceService {
    auth: Arc<dyn AuthorizerPort>,
    workspace: Arc<dyn WorkspacePort>,
    devices: Arc<dyn DeviceApiPort>,
    ui: Arc<dyn UserInterfacePort>,
}

impl DeviceService {
    pub fn new(
        auth: Arc<dyn AuthorizerPort>,
        workspace: Arc<dyn WorkspacePort>,
        devices: Arc<dyn DeviceApiPort>,
        ui: Arc<dyn UserInterfacePort>,
    ) -> Self {
        Self {
            auth,
            workspace,
            devices,
            ui,
        }
    }

    /// Show the agent URL of a device.
    pub async fn agent_url(&self) -> CommandOutcome {
        settle(self.run_agent_url().await)
    }

    /// Add a device to the workspace's device group.
    pub async fn add_device_to_group(&self) -> CommandOutcome {
        settle(self.run_add_device().await)
    }

    /// Remove a device from the workspace's device group.
    pub async fn remove_device_from_group(&self) -> CommandOutcome {
        settle(self.run_remove_device().await)
    }

    async fn run_agent_url(&self) -> Result<(), CommandOutcome> {
        let token = self.authorize().await?;
        let device_id = self.prompt_device_id().await?;

        debug!(%device_id, "fetching device");
        let device = self
            .devices
            .get_device(&token, &device_id)
            .await
            .map_err(|e| self.fail(messages::with_reason(messages::DEVICE_RETRIEVE, e)))?;

        match device.agent_url {
            Some(url) => {
                self.ui.show_info(&url);
                Ok(())
            }
            None => Err(self.fail(messages::no_agent_url(&device_id))),
        }
    }

    async fn run_add_device(&self) -> Result<(), CommandOutcome> {
        let token = self.authorize().await?;
        let group = self.device_group().await?;
        let device_id = self.prompt_device_id().await?;

        debug!(%device_id, device_group_id = %group, "adding device to group");
        self.devices
            .add_devices(&token, &group, std::slice::from_ref(&device_id))
            .await
            .map_err(|e| self.fail(messages::with_reason(messages::DEVICE_ADD, e)))?;

        info!(%device_id, device_group_id = %group, "device added");
        self.ui.show_info(&messages::device_added(&device_id, &group));
        Ok(())
    }

    async fn run_remove_device(&self) -> Result<(), CommandOutcome> {
        let token = self.authorize().await?;
        let group = self.device_group().await?;
        let device_id = self.prompt_device_id().await?;

        debug!(%device_id, device_group_id = %group, "removing device from group");
        self.devices
            .remove_devices(&token, &group, None, std::slice::from_ref(&device_id))
            .await
            .map_err(|e| self.fail(messages::with_reason(messages::DEVICE_REMOVE, e)))?;

        info!(%device_id, device_group_id = %group, "device removed");
        self.ui
            .show_info(&messages::device_removed(&device_id, &group));
        Ok(())
    }

    async fn authorize(&self) -> Result<AccessToken, CommandOutcome> {
        match self.auth.authorize().await {
            Ok(token) => Ok(token),
            Err(AuthError::Cancelled) => {
                debug!("login cancelled");
                self.ui.show_error(messages::AUTH_CANCELLED);
                Err(CommandOutcome::Aborted)
            }
            Err(e) => Err(self.fail(messages::with_reason(messages::AUTH_LOGIN, e))),
        }
    }

    /// Device group of the current workspace.
    ///
    /// A directory without workspace settings ends the command silently.
    async fn device_group(&self) -> Result<DeviceGroupId, CommandOutcome> {
        match self.workspace.workspace_data().await {
            Ok(Some(config)) => Ok(config.device_group_id),
            Ok(None) => {
                debug!("not a workspace, skipping");
                Err(CommandOutcome::Skipped)
            }
            Err(e) => Err(self.fail(messages::with_reason(messages::WORKSPACE_LOAD, e))),
        }
    }

    async fn prompt_device_id(&self) -> Result<DeviceId, CommandOutcome> {
        let answer = self
            .ui
            .input_box(&PromptRequest::new(messages::DEVICE_PROMPT_DEVICE_ID))
            .await;

        DeviceId::parse(answer.as_deref()).ok_or_else(|| {
            self.ui.show_error(messages::DEVICE_ID_EMPTY);
            CommandOutcome::Aborted
        })
    }

    fn fail(&self, message: String) -> CommandOutcome {
        warn!("{message}");
        self.ui.show_error(&message);
        CommandOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Device, WorkspaceConfig};
    use crate::ports::authorizer::MockAuthorizerPort;
    use crate::ports::device_api::MockDeviceApiPort;
    use crate::ports::workspace::MockWorkspacePort;
    use crate::ports::{DevicePortError, WorkspaceError};
    use crate::testing::RecordingUi;
    use std::path::PathBuf;

    fn authorized() -> MockAuthorizerPort {
        let mut auth = MockAuthorizerPort::new();
        auth.expect_authorize()
            .times(1)
            .returning(|| Ok(AccessToken::new("token-1")));
        auth
    }

    fn workspace(group: &'static str) -> MockWorkspacePort {
        let mut workspace = MockWorkspacePort::new();
        workspace
            .expect_workspace_data()
            .returning(move || Ok(Some(WorkspaceConfig::new(DeviceGroupId::new(group)))));
        workspace
    }

    fn service(
        auth: MockAuthorizerPort,
        workspace: MockWorkspacePort,
        devices: MockDeviceApiPort,
        ui: &Arc<RecordingUi>,
    ) -> DeviceService {
        DeviceService::new(
            Arc::new(auth),
            Arc::new(workspace),
            Arc::new(devices),
            ui.clone(),
        )
    }

    #[tokio::test]
    async fn test_add_device_echoes_device_and_group() {
        let mut devices = MockDeviceApiPort::new();
        devices
            .expect_add_devices()
            .times(1)
            .withf(|token, group, ids| {
                token.secret() == "token-1"
                    && group.as_str() == "dg-1"
                    && ids.len() == 1
                    && ids[0].as_str() == "abc123"
            })
            .returning(|_, _, _| Ok(()));

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(authorized(), workspace("dg-1"), devices, &ui)
            .add_device_to_group()
            .await;

        assert_eq!(outcome, CommandOutcome::Succeeded);
        let infos = ui.infos();
        assert_eq!(infos.len(), 1);
        assert!(infos[0].contains("abc123"));
        assert!(infos[0].contains("dg-1"));
        assert!(ui.errors().is_empty());
    }

    #[tokio::test]
    async fn test_remove_device_passes_no_unassign_flag() {
        let mut devices = MockDeviceApiPort::new();
        devices
            .expect_remove_devices()
            .times(1)
            .withf(|_, group, unassign_inactive, ids| {
                group.as_str() == "dg-1" && unassign_inactive.is_none() && ids[0].as_str() == "abc123"
            })
            .returning(|_, _, _, _| Ok(()));

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(authorized(), workspace("dg-1"), devices, &ui)
            .remove_device_from_group()
            .await;

        assert_eq!(outcome, CommandOutcome::Succeeded);
        assert_eq!(ui.infos(), vec!["The abc123 is removed from dg-1".to_string()]);
    }

    #[tokio::test]
    async fn test_agent_url_shows_url() {
        let mut devices = MockDeviceApiPort::new();
        devices
            .expect_get_device()
            .times(1)
            .withf(|_, id| id.as_str() == "abc123")
            .returning(|_, id| {
                Ok(Device::new(id.clone()).with_agent_url("https://agent.electricimp.com/xyz"))
            });

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(authorized(), MockWorkspacePort::new(), devices, &ui)
            .agent_url()
            .await;

        assert_eq!(outcome, CommandOutcome::Succeeded);
        assert_eq!(ui.infos(), vec!["https://agent.electricimp.com/xyz".to_string()]);
    }

    #[tokio::test]
    async fn test_agent_url_missing_is_reported() {
        let mut devices = MockDeviceApiPort::new();
        devices
            .expect_get_device()
            .times(1)
            .returning(|_, id| Ok(Device::new(id.clone())));

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(authorized(), MockWorkspacePort::new(), devices, &ui)
            .agent_url()
            .await;

        assert_eq!(outcome, CommandOutcome::Failed);
        assert!(ui.errors()[0].contains("abc123"));
    }

    #[tokio::test]
    async fn test_empty_input_aborts_before_network() {
        for answer in [None, Some(""), Some("   ")] {
            for command in 0..3 {
                // No expectations: any remote call panics
                let devices = MockDeviceApiPort::new();
                let ui = Arc::new(RecordingUi::new().with_answer(answer));
                let svc = service(authorized(), workspace("dg-1"), devices, &ui);

                let outcome = match command {
                    0 => svc.agent_url().await,
                    1 => svc.add_device_to_group().await,
                    _ => svc.remove_device_from_group().await,
                };

                assert_eq!(outcome, CommandOutcome::Aborted);
                assert_eq!(ui.errors(), vec![messages::DEVICE_ID_EMPTY.to_string()]);
                assert!(ui.infos().is_empty());
            }
        }
    }

    #[tokio::test]
    async fn test_missing_workspace_skips_without_prompt() {
        for remove in [false, true] {
            let mut no_workspace = MockWorkspacePort::new();
            no_workspace
                .expect_workspace_data()
                .times(1)
                .returning(|| Ok(None));

            let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
            let svc = service(authorized(), no_workspace, MockDeviceApiPort::new(), &ui);
            let outcome = if remove {
                svc.remove_device_from_group().await
            } else {
                svc.add_device_to_group().await
            };

            assert_eq!(outcome, CommandOutcome::Skipped);
            assert!(ui.prompts().is_empty());
            assert!(ui.notifications().is_empty());
        }
    }

    #[tokio::test]
    async fn test_unreadable_workspace_is_reported() {
        let mut broken = MockWorkspacePort::new();
        broken.expect_workspace_data().returning(|| {
            Err(WorkspaceError::Parse {
                path: PathBuf::from("/work/imp.config"),
                reason: "expected value at line 1".to_string(),
            })
        });

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(authorized(), broken, MockDeviceApiPort::new(), &ui)
            .add_device_to_group()
            .await;

        assert_eq!(outcome, CommandOutcome::Failed);
        assert!(ui.prompts().is_empty());
        assert!(ui.errors()[0].starts_with(messages::WORKSPACE_LOAD));
    }

    #[tokio::test]
    async fn test_auth_failure_stops_everything() {
        let mut auth = MockAuthorizerPort::new();
        auth.expect_authorize()
            .times(1)
            .returning(|| Err(AuthError::LoginFailed("invalid credentials".to_string())));

        let mut untouched = MockWorkspacePort::new();
        untouched.expect_workspace_data().never();

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(auth, untouched, MockDeviceApiPort::new(), &ui)
            .add_device_to_group()
            .await;

        assert_eq!(outcome, CommandOutcome::Failed);
        assert!(ui.prompts().is_empty());
        assert_eq!(
            ui.errors(),
            vec!["Login error: invalid credentials".to_string()]
        );
    }

    #[tokio::test]
    async fn test_auth_cancel_is_distinct_from_failure() {
        let mut auth = MockAuthorizerPort::new();
        auth.expect_authorize()
            .times(1)
            .returning(|| Err(AuthError::Cancelled));

        let ui = Arc::new(RecordingUi::new());
        let outcome = service(auth, MockWorkspacePort::new(), MockDeviceApiPort::new(), &ui)
            .agent_url()
            .await;

        assert_eq!(outcome, CommandOutcome::Aborted);
        assert_eq!(ui.errors(), vec![messages::AUTH_CANCELLED.to_string()]);
    }

    #[tokio::test]
    async fn test_remote_rejection_text_is_shown() {
        let mut devices = MockDeviceApiPort::new();
        devices.expect_add_devices().times(1).returning(|_, _, _| {
            Err(DevicePortError::Network {
                message: "timeout".to_string(),
            })
        });

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(authorized(), workspace("dg-1"), devices, &ui)
            .add_device_to_group()
            .await;

        assert_eq!(outcome, CommandOutcome::Failed);
        let errors = ui.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with(messages::DEVICE_ADD));
        assert!(errors[0].contains("timeout"));
    }

    #[tokio::test]
    async fn test_remove_rejection_uses_remove_prefix() {
        let mut devices = MockDeviceApiPort::new();
        devices
            .expect_remove_devices()
            .times(1)
            .returning(|_, _, _, _| {
                Err(DevicePortError::Rejected {
                    message: "Device abc123 is not in dg-1 (HTTP 400)".to_string(),
                })
            });

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(authorized(), workspace("dg-1"), devices, &ui)
            .remove_device_from_group()
            .await;

        assert_eq!(outcome, CommandOutcome::Failed);
        assert!(ui.infos().is_empty());
        assert_eq!(
            ui.errors(),
            vec!["Cannot remove device: Device abc123 is not in dg-1 (HTTP 400)".to_string()]
        );
    }

    #[tokio::test]
    async fn test_retrieve_failure_uses_retrieve_prefix() {
        let mut devices = MockDeviceApiPort::new();
        devices.expect_get_device().times(1).returning(|_, id| {
            Err(DevicePortError::DeviceNotFound {
                device_id: id.to_string(),
                message: format!("Device {id} does not exist"),
            })
        });

        let ui = Arc::new(RecordingUi::new().with_answer(Some("abc123")));
        let outcome = service(authorized(), MockWorkspacePort::new(), devices, &ui)
            .agent_url()
            .await;

        assert_eq!(outcome, CommandOutcome::Failed);
        assert_eq!(
            ui.errors(),
            vec!["Cannot retrieve device: Device abc123 does not exist".to_string()]
        );
    }
}
