//! Recording fakes for the ports.
//!
//! Available to this crate's tests and, through the `test-utils` feature,
//! to adapter crates.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{AccessToken, Device, DeviceGroupId, DeviceId, WorkspaceConfig};
use crate::ports::{
    AuthError, AuthorizerPort, DeviceApiPort, DevicePortError, DevicePortResult, PromptRequest,
    UserInterfacePort, WorkspaceError, WorkspacePort,
};

/// A notification captured by [`RecordingUi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Error(String),
}

/// User interface that answers prompts from a script and records output.
///
/// Prompts beyond the scripted answers are treated as dismissed.
#[derive(Debug, Default)]
pub struct RecordingUi {
    answers: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<PromptRequest>>,
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next prompt.
    #[must_use]
    pub fn with_answer(self, answer: Option<&str>) -> Self {
        self.answers
            .lock()
            .unwrap()
            .push_back(answer.map(str::to_string));
        self
    }

    pub fn prompts(&self) -> Vec<PromptRequest> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Info(message) => Some(message),
                Notification::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Error(message) => Some(message),
                Notification::Info(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl UserInterfacePort for RecordingUi {
    async fn input_box(&self, request: &PromptRequest) -> Option<String> {
        self.prompts.lock().unwrap().push(request.clone());
        self.answers.lock().unwrap().pop_front().flatten()
    }

    fn show_info(&self, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::Info(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::Error(message.to_string()));
    }
}

/// Authorizer that always returns the same result.
#[derive(Debug)]
pub struct StaticAuthorizer {
    result: Result<String, String>,
}

impl StaticAuthorizer {
    pub fn granting(token: &str) -> Self {
        Self {
            result: Ok(token.to_string()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(reason.to_string()),
        }
    }
}

#[async_trait]
impl AuthorizerPort for StaticAuthorizer {
    async fn authorize(&self) -> Result<AccessToken, AuthError> {
        self.result
            .clone()
            .map(AccessToken::new)
            .map_err(AuthError::LoginFailed)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Workspace with fixed settings.
#[derive(Debug, Default)]
pub struct StaticWorkspace {
    config: Option<WorkspaceConfig>,
}

impl StaticWorkspace {
    pub fn with_group(device_group_id: &str) -> Self {
        Self {
            config: Some(WorkspaceConfig::new(DeviceGroupId::new(device_group_id))),
        }
    }

    /// A directory that is not a workspace.
    pub fn absent() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkspacePort for StaticWorkspace {
    async fn workspace_data(&self) -> Result<Option<WorkspaceConfig>, WorkspaceError> {
        Ok(self.config.clone())
    }
}

/// A remote call captured by [`RecordingDeviceApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    Get(DeviceId),
    Add(DeviceGroupId, Vec<DeviceId>),
    Remove(DeviceGroupId, Option<bool>, Vec<DeviceId>),
}

/// Device API that records calls and either succeeds or fails with a
/// network error carrying a fixed message.
#[derive(Debug, Default)]
pub struct RecordingDeviceApi {
    agent_url: Option<String>,
    failure: Option<String>,
    calls: Mutex<Vec<DeviceCall>>,
}

impl RecordingDeviceApi {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_agent_url(mut self, url: &str) -> Self {
        self.agent_url = Some(url.to_string());
        self
    }

    #[must_use]
    pub fn failing_with(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: DeviceCall) -> DevicePortResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(DevicePortError::Network {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DeviceApiPort for RecordingDeviceApi {
    async fn get_device(
        &self,
        _token: &AccessToken,
        device_id: &DeviceId,
    ) -> DevicePortResult<Device> {
        self.record(DeviceCall::Get(device_id.clone()))?;
        let mut device = Device::new(device_id.clone());
        device.agent_url.clone_from(&self.agent_url);
        Ok(device)
    }

    async fn add_devices(
        &self,
        _token: &AccessToken,
        device_group_id: &DeviceGroupId,
        device_ids: &[DeviceId],
    ) -> DevicePortResult<()> {
        self.record(DeviceCall::Add(device_group_id.clone(), device_ids.to_vec()))
    }

    async fn remove_devices(
        &self,
        _token: &AccessToken,
        device_group_id: &DeviceGroupId,
        unassign_inactive: Option<bool>,
        device_ids: &[DeviceId],
    ) -> DevicePortResult<()> {
        self.record(DeviceCall::Remove(
            device_group_id.clone(),
            unassign_inactive,
            device_ids.to_vec(),
        ))
    }
}
