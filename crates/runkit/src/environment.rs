//! Startup check that runkit is running from a shell.

use runkit_input::EnvReader;
use thiserror::Error;

/// Set by web servers when they launch a CGI program.
pub const GATEWAY_VAR: &str = "GATEWAY_INTERFACE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("runkit must be run from a command line, not through a web server gateway ({0})")]
    InvalidServerEnvironment(String),
}

/// Execution context checks.
pub struct Environment;

impl Environment {
    /// Fails when the process was launched by a web server gateway.
    pub fn validate(env: &dyn EnvReader) -> Result<(), EnvironmentError> {
        match env.var(GATEWAY_VAR) {
            Some(gateway) if !gateway.trim().is_empty() => {
                Err(EnvironmentError::InvalidServerEnvironment(gateway))
            }
            _ => Ok(()),
        }
    }
}
