//! Argument dispatch.
//!
//! The raw argument vector (program name already stripped) is read as an
//! explicit triple: command id, optional sub-command name, remaining
//! arguments. Resolution then goes:
//!
//! ```text
//! []  or  ["help", ..]           → help runnable, full argv
//! [id, ..]     id unregistered   → UnknownCommand
//! [id, sub, ..] sub not declared → InvalidSubcommand
//! [id, sub, rest..]              → arity check of rest against table[sub]
//!                                → runnable.run([sub, rest..], argc)
//! ```

use std::rc::Rc;

use runkit_input::TerminalIO;
use tracing::{debug, instrument};

use crate::arity;
use crate::error::DispatchError;
use crate::handler::{CommandContext, Extensions, Runnable};
use crate::output::OutputSink;
use crate::registry::Registry;

/// Command id of the built-in help runnable.
pub const HELP_ID: &str = "help";

/// A parsed argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// First argument, the top-level command id.
    pub command: Option<String>,
    /// Second argument, the sub-command name.
    pub subcommand: Option<String>,
    /// Everything after the sub-command.
    pub rest: Vec<String>,
    /// Length of the original argument vector.
    pub total: usize,
}

impl Invocation {
    /// Splits `argv` into command, sub-command and remaining arguments.
    pub fn parse<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = argv.into_iter().map(Into::into);
        let command = args.next();
        let subcommand = args.next();
        let rest: Vec<String> = args.collect();
        let total = command.iter().count() + subcommand.iter().count() + rest.len();
        Self {
            command,
            subcommand,
            rest,
            total,
        }
    }

    /// True when the call should be answered by the help runnable.
    pub fn is_help(&self) -> bool {
        match self.command.as_deref() {
            None => true,
            Some(id) => id == HELP_ID,
        }
    }

    /// The arguments handed to a runnable: sub-command name then the rest.
    pub fn runnable_args(&self) -> Vec<String> {
        self.subcommand
            .iter()
            .cloned()
            .chain(self.rest.iter().cloned())
            .collect()
    }

    /// The original argument vector.
    pub fn argv(&self) -> Vec<String> {
        self.command
            .iter()
            .cloned()
            .chain(self.runnable_args())
            .collect()
    }
}

/// A resolved, validated call ready to run.
pub struct Resolved {
    pub runnable: Rc<dyn Runnable>,
    pub args: Vec<String>,
    pub total: usize,
}

/// Routes argument vectors to registered runnables.
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: Registry,
    app_state: Extensions,
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            app_state: Extensions::new(),
        }
    }

    /// Sets the state every runnable receives in its [`CommandContext`].
    pub fn with_app_state(mut self, app_state: Extensions) -> Self {
        self.app_state = app_state;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access for registering runnables after construction.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn app_state(&self) -> &Extensions {
        &self.app_state
    }

    pub fn app_state_mut(&mut self) -> &mut Extensions {
        &mut self.app_state
    }

    /// Finds and validates the runnable for `invocation` without running it.
    pub fn resolve(&self, invocation: &Invocation) -> Result<Resolved, DispatchError> {
        if invocation.is_help() {
            debug!("routing to help");
            return Ok(Resolved {
                runnable: self.registry.get(HELP_ID)?,
                args: invocation.argv(),
                total: invocation.total,
            });
        }

        let id = invocation.command.as_deref().unwrap_or_default();
        if !self.registry.has(id) {
            return Err(DispatchError::UnknownCommand(id.to_string()));
        }
        let runnable = self.registry.get(id)?;
        let table = runnable.commands();

        if let Some(sub) = invocation.subcommand.as_deref() {
            if !table.contains(sub) {
                return Err(DispatchError::InvalidSubcommand {
                    command: id.to_string(),
                    subcommand: sub.to_string(),
                });
            }
            arity::validate(&table, sub, &invocation.rest)?;
            debug!(command = id, subcommand = sub, args = invocation.rest.len(), "arity ok");
        }

        Ok(Resolved {
            runnable,
            args: invocation.runnable_args(),
            total: invocation.total,
        })
    }

    /// Parses `argv`, resolves the runnable and runs it.
    #[instrument(level = "debug", skip_all)]
    pub fn dispatch<I, S>(
        &self,
        argv: I,
        output: &dyn OutputSink,
        terminal: &dyn TerminalIO,
    ) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let invocation = Invocation::parse(argv);
        debug!(?invocation, "dispatching");

        let resolved = self.resolve(&invocation)?;
        let ctx = CommandContext {
            registry: &self.registry,
            output,
            terminal,
            app_state: &self.app_state,
        };

        let command = resolved.runnable.id().to_string();
        debug!(command = %command, "running");
        resolved
            .runnable
            .run(&resolved.args, resolved.total, &ctx)
            .map_err(|err| DispatchError::from_runnable(&command, err))
    }
}
