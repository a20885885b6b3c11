//! Explicit login and logout.

use std::sync::Arc;

use tracing::warn;

use super::outcome::CommandOutcome;
use crate::messages;
use crate::ports::{AuthError, AuthorizerPort, UserInterfacePort};

/// Runs the authorization flow on its own, outside of a device command.
pub struct SessionService {
    auth: Arc<dyn AuthorizerPort>,
    ui: Arc<dyn UserInterfacePort>,
}

impl SessionService {
    pub fn new(auth: Arc<dyn AuthorizerPort>, ui: Arc<dyn UserInterfacePort>) -> Self {
        Self { auth, ui }
    }

    /// Obtain (and store) a token, reporting the result.
    pub async fn login(&self) -> CommandOutcome {
        match self.auth.authorize().await {
            Ok(_) => {
                self.ui.show_info(messages::LOGIN_SUCCESS);
                CommandOutcome::Succeeded
            }
            Err(AuthError::Cancelled) => {
                self.ui.show_error(messages::AUTH_CANCELLED);
                CommandOutcome::Aborted
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.ui
                    .show_error(&messages::with_reason(messages::AUTH_LOGIN, e));
                CommandOutcome::Failed
            }
        }
    }

    /// Forget stored credentials.
    pub async fn logout(&self) -> CommandOutcome {
        match self.auth.logout().await {
            Ok(()) => {
                self.ui.show_info(messages::LOGOUT_SUCCESS);
                CommandOutcome::Succeeded
            }
            Err(e) => {
                warn!(error = %e, "logout failed");
                self.ui.show_error(&e.to_string());
                CommandOutcome::Failed
            }
        }
    }
}
