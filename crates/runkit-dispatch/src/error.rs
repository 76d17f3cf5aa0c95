//! Dispatch error taxonomy.

use thiserror::Error;

use crate::arity::ArityError;

/// Why a dispatch did not complete.
///
/// Every variant is reported to the user; none of them is raised as a panic.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A lookup named a command id that is not registered.
    #[error("No runnable is registered under [{0}]")]
    NotFound(String),

    /// The first argument does not name a registered runnable.
    #[error("Command [{0}] is not recognised. Run 'help list-runnables' to see what is available.")]
    UnknownCommand(String),

    /// The second argument is not one of the runnable's sub-commands.
    #[error("[{subcommand}] is not a valid sub-command of [{command}]")]
    InvalidSubcommand { command: String, subcommand: String },

    /// The sub-command was given the wrong number of arguments.
    #[error(transparent)]
    Arity(#[from] ArityError),

    /// The runnable itself failed.
    #[error("{command}: {source}")]
    Failed {
        command: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DispatchError {
    /// Wraps a runnable failure, keeping arity and dispatch errors
    /// recognisable.
    pub fn from_runnable(command: &str, err: anyhow::Error) -> Self {
        let err = match err.downcast::<DispatchError>() {
            Ok(dispatch) => return dispatch,
            Err(other) => other,
        };
        match err.downcast::<ArityError>() {
            Ok(arity) => DispatchError::Arity(arity),
            Err(other) => DispatchError::Failed {
                command: command.to_string(),
                source: other.into(),
            },
        }
    }

    /// True for mistakes in how the command was invoked, as opposed to
    /// failures while running it.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, DispatchError::Failed { .. })
    }

    /// Process exit status for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_usage_error() {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runnable_arity_errors_are_unwrapped() {
        let err = anyhow::Error::new(ArityError::RequiresAtLeastOne {
            subcommand: "watch".into(),
        });
        let dispatch = DispatchError::from_runnable("files", err);
        assert!(matches!(
            dispatch,
            DispatchError::Arity(ArityError::RequiresAtLeastOne { .. })
        ));
        assert_eq!(dispatch.exit_code(), 2);
    }

    #[test]
    fn nested_dispatch_errors_pass_through() {
        let err = anyhow::Error::new(DispatchError::NotFound("ghost".into()));
        let dispatch = DispatchError::from_runnable("help", err);
        assert!(matches!(dispatch, DispatchError::NotFound(id) if id == "ghost"));
    }

    #[test]
    fn other_failures_keep_command_and_message() {
        let dispatch = DispatchError::from_runnable("deploy", anyhow::anyhow!("disk full"));
        assert_eq!(dispatch.to_string(), "deploy: disk full");
        assert!(!dispatch.is_usage_error());
        assert_eq!(dispatch.exit_code(), 1);
    }

    #[test]
    fn usage_errors_exit_with_two() {
        for err in [
            DispatchError::NotFound("x".into()),
            DispatchError::UnknownCommand("x".into()),
            DispatchError::InvalidSubcommand {
                command: "x".into(),
                subcommand: "y".into(),
            },
        ] {
            assert_eq!(err.exit_code(), 2, "{}", err);
        }
    }

    #[test]
    fn messages_name_the_offending_tokens() {
        let err = DispatchError::InvalidSubcommand {
            command: "route".into(),
            subcommand: "frobnicate".into(),
        };
        assert!(err.to_string().contains("[frobnicate]"));
        assert!(err.to_string().contains("[route]"));
        assert!(DispatchError::UnknownCommand("bogus-id".into())
            .to_string()
            .contains("[bogus-id]"));
    }
}
