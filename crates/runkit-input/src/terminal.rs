//! Terminal line I/O.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Write a prompt to stdout without a trailing newline.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read a line from stdin, blocking until one is available.
    ///
    /// Returns the line including its terminator, or an empty string on EOF.
    fn read_line(&self) -> io::Result<String>;
}

/// Real terminal I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Scripted terminal for tests.
///
/// Returns the configured responses in order, then EOF. Every prompt written
/// is recorded and can be inspected with [`MockTerminal::prompts`].
#[derive(Debug)]
pub struct MockTerminal {
    responses: Vec<String>,
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTerminal {
    /// Create a mock terminal that returns the given response once.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::build(vec![response.into()])
    }

    /// Create a mock terminal that returns multiple responses in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::build(responses.into_iter().map(Into::into).collect())
    }

    /// Create a mock that simulates EOF (Ctrl+D) on the first read.
    pub fn eof() -> Self {
        Self::build(Vec::new())
    }

    /// Prompts written so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    /// Number of responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses
            .len()
            .saturating_sub(self.response_index.load(Ordering::SeqCst))
    }

    fn build(responses: Vec<String>) -> Self {
        Self {
            responses,
            response_index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl TerminalIO for MockTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_responses_then_eof() {
        let terminal = MockTerminal::with_responses(["first", "second"]);
        assert_eq!(terminal.read_line().unwrap(), "first\n");
        assert_eq!(terminal.read_line().unwrap(), "second\n");
        assert_eq!(terminal.read_line().unwrap(), "");
        assert_eq!(terminal.remaining(), 0);
    }

    #[test]
    fn mock_records_prompts() {
        let terminal = MockTerminal::with_response("x");
        terminal.write_prompt("Name: ").unwrap();
        terminal.write_prompt("Id: ").unwrap();
        assert_eq!(terminal.prompts(), vec!["Name: ", "Id: "]);
    }

    #[test]
    fn mock_counts_remaining_responses() {
        assert_eq!(MockTerminal::eof().remaining(), 0);
        assert_eq!(MockTerminal::with_response("a").remaining(), 1);
    }
}
