//! Terminal implementation of the user interface port.

use async_trait::async_trait;
use console::style;
use impdev_core::{PromptRequest, UserInterfacePort};
use tracing::{debug, warn};

use crate::utils::input::prompt_line;

/// Prompts on the terminal, prints information to stdout and errors to
/// stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalUi;

impl TerminalUi {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserInterfacePort for TerminalUi {
    async fn input_box(&self, request: &PromptRequest) -> Option<String> {
        let prompt = request.prompt.clone();
        let secret = request.secret;
        match tokio::task::spawn_blocking(move || prompt_line(&prompt, secret)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                debug!(error = %e, "prompt input unavailable");
                None
            }
            Err(e) => {
                warn!(error = %e, "prompt task failed");
                None
            }
        }
    }

    fn show_info(&self, message: &str) {
        println!("{message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("{}", style(message).red());
    }
}
