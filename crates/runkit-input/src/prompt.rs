//! Simple terminal prompts.

use crate::terminal::TerminalIO;
use crate::InputError;

/// Single-line text prompt.
///
/// Writes the prompt, then blocks until the user enters a line. Reads happen
/// whether or not stdin is a TTY, so answers can be piped in by scripts.
///
/// # Example
///
/// ```ignore
/// use runkit_input::{RealTerminal, TextPrompt};
///
/// let id = TextPrompt::new("Command id: ").ask(&RealTerminal)?;
/// let ns = TextPrompt::new("Module path: ").optional().ask(&RealTerminal)?;
/// ```
#[derive(Debug, Clone)]
pub struct TextPrompt {
    prompt: String,
    required: bool,
}

impl TextPrompt {
    /// Create a required prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            required: true,
        }
    }

    /// Accept an empty answer, returned as `None`.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Ask the question on `terminal`.
    ///
    /// Returns `Ok(None)` for an empty answer to an optional prompt. An empty
    /// answer to a required prompt is a [`InputError::ValidationFailed`], and
    /// EOF is always [`InputError::PromptCancelled`].
    pub fn ask<T: TerminalIO + ?Sized>(&self, terminal: &T) -> Result<Option<String>, InputError> {
        terminal
            .write_prompt(&self.prompt)
            .map_err(|e| InputError::PromptFailed(e.to_string()))?;

        let line = terminal.read_line().map_err(InputError::StdinFailed)?;

        // Check for EOF (user pressed Ctrl+D)
        if line.is_empty() {
            return Err(InputError::PromptCancelled);
        }

        let answer = line.trim().to_string();

        if !answer.is_empty() {
            return Ok(Some(answer));
        }
        if self.required {
            return Err(InputError::validation(format!(
                "an answer is required for '{}'",
                self.prompt.trim().trim_end_matches(':')
            )));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTerminal;

    #[test]
    fn collects_input() {
        let terminal = MockTerminal::with_response("Alice");
        let result = TextPrompt::new("Name: ").ask(&terminal).unwrap();
        assert_eq!(result, Some("Alice".to_string()));
        assert_eq!(terminal.prompts(), vec!["Name: "]);
    }

    #[test]
    fn trims_whitespace() {
        let terminal = MockTerminal::with_response("  Bob  ");
        let result = TextPrompt::new("Name: ").ask(&terminal).unwrap();
        assert_eq!(result, Some("Bob".to_string()));
    }

    #[test]
    fn optional_empty_is_none() {
        let terminal = MockTerminal::with_response("   ");
        let result = TextPrompt::new("Dir: ").optional().ask(&terminal).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn required_empty_is_rejected() {
        let terminal = MockTerminal::with_response("");
        let result = TextPrompt::new("Name: ").ask(&terminal);
        match result {
            Err(InputError::ValidationFailed(msg)) => assert!(msg.contains("Name")),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn eof_cancels() {
        let terminal = MockTerminal::eof();
        let result = TextPrompt::new("Name: ").optional().ask(&terminal);
        assert!(matches!(result, Err(InputError::PromptCancelled)));
    }

    #[test]
    fn exhausted_input_cancels_after_prompting() {
        let terminal = MockTerminal::eof();
        let result = TextPrompt::new("Name: ").ask(&terminal);
        assert!(matches!(result, Err(InputError::PromptCancelled)));
        assert_eq!(terminal.prompts().len(), 1);
    }
}
