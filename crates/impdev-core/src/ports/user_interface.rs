//! Host user interface port.

use async_trait::async_trait;

/// A single-line input request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Text shown to the user.
    pub prompt: String,
    /// Whether the answer must not be echoed (passwords).
    pub secret: bool,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            secret: false,
        }
    }

    pub fn secret(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            secret: true,
        }
    }
}

/// Port for interacting with the user.
///
/// `input_box` suspends until the user answers. A dismissed prompt, or one
/// that could not be read, is `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserInterfacePort: Send + Sync {
    async fn input_box(&self, request: &PromptRequest) -> Option<String>;

    /// Show an informational notification.
    fn show_info(&self, message: &str);

    /// Show an error notification.
    fn show_error(&self, message: &str);
}
