//! Environment abstractions for testability.
//!
//! Lets startup checks and configuration discovery read environment
//! variables without touching the real process environment in tests.

use std::collections::HashMap;

/// Abstraction over environment variables.
pub trait EnvReader {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn mock_env_empty() {
        let env = MockEnv::new();
        assert_eq!(env.var("MISSING"), None);
    }

    #[test]
    fn mock_env_with_vars() {
        let env = MockEnv::new()
            .with_var("RUNKIT_CONFIG", "/etc/runkit.toml")
            .with_var("HOME", "/home/user");

        assert_eq!(env.var("RUNKIT_CONFIG"), Some("/etc/runkit.toml".to_string()));
        assert_eq!(env.var("HOME"), Some("/home/user".to_string()));
        assert_eq!(env.var("MISSING"), None);
    }

    #[test]
    #[serial]
    fn real_env_reads_process_variables() {
        std::env::set_var("RUNKIT_INPUT_TEST_VAR", "present");
        assert_eq!(
            RealEnv.var("RUNKIT_INPUT_TEST_VAR"),
            Some("present".to_string())
        );
        std::env::remove_var("RUNKIT_INPUT_TEST_VAR");
        assert_eq!(RealEnv.var("RUNKIT_INPUT_TEST_VAR"), None);
    }
}
