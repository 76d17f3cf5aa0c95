//! Error types for input collection.

use std::io;

/// Errors that can occur while reading input from the terminal.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Failed to read from stdin.
    #[error("Failed to read stdin: {0}")]
    StdinFailed(#[source] io::Error),

    /// User closed stdin (Ctrl+D) while a prompt was waiting.
    #[error("Prompt cancelled by user.")]
    PromptCancelled,

    /// Writing the prompt text failed.
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    /// The answer was rejected.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl InputError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationFailed(msg.into())
    }
}
