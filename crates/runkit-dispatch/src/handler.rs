//! Runnable handler types.
//!
//! A [`Runnable`] implements one top-level command. It declares its identity
//! and its sub-command arity table, and does the work in [`Runnable::run`].
//! Everything a runnable needs from the outside world arrives through the
//! [`CommandContext`]:
//!
//! | Field | Purpose |
//! |-------|---------|
//! | `registry` | Look up other runnables (help listings) |
//! | `output` | Write user-visible lines |
//! | `terminal` | Block on a line of user input |
//! | `app_state` | Long-lived typed state (configuration, clients) |
//!
//! # Example
//!
//! ```rust
//! use runkit_dispatch::{Arity, CommandContext, LineStyle, Runnable, SubcommandTable};
//!
//! struct Greet;
//!
//! impl Runnable for Greet {
//!     fn id(&self) -> &str {
//!         "greet"
//!     }
//!
//!     fn commands(&self) -> SubcommandTable {
//!         SubcommandTable::new().with("hello", Arity::Exact(1))
//!     }
//!
//!     fn run(&self, args: &[String], _total: usize, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
//!         let name = args.get(1).map(String::as_str).unwrap_or("world");
//!         ctx.output.write_line(&format!("Hello, {}!", name), LineStyle::plain())?;
//!         Ok(())
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use runkit_input::TerminalIO;

use crate::arity::SubcommandTable;
use crate::output::OutputSink;
use crate::registry::Registry;

/// Type-safe container for state shared with runnables.
///
/// The application inserts long-lived values (configuration, clients) once at
/// bootstrap; runnables read them back by type.
///
/// ```rust
/// use runkit_dispatch::Extensions;
///
/// struct Settings { verbose: bool }
///
/// let mut state = Extensions::new();
/// state.insert(Settings { verbose: true });
///
/// let settings = state.get_required::<Settings>()?;
/// assert!(settings.verbose);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Default)]
pub struct Extensions {
    map: HashMap<TypeId, Box<dyn Any>>,
}

impl Extensions {
    /// Creates a new empty extensions container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value into the extensions.
    ///
    /// If a value of this type already exists, it is replaced and returned.
    pub fn insert<T: 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|b| *b))
    }

    /// Gets a reference to a value of the specified type.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Gets a required reference to a value of the specified type.
    ///
    /// Returns an error if no value of this type exists.
    pub fn get_required<T: 'static>(&self) -> Result<&T, anyhow::Error> {
        self.get::<T>().ok_or_else(|| {
            anyhow::anyhow!(
                "Extension missing: type {} not found in context",
                std::any::type_name::<T>()
            )
        })
    }

    /// Returns `true` if the extensions contain a value of the specified type.
    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extensions")
            .field("len", &self.map.len())
            .finish_non_exhaustive()
    }
}

/// Context passed to [`Runnable::run`].
pub struct CommandContext<'a> {
    /// Every registered runnable, including the one being run.
    pub registry: &'a Registry,
    /// Where user-visible output goes.
    pub output: &'a dyn OutputSink,
    /// Blocking line input for interactive runnables.
    pub terminal: &'a dyn TerminalIO,
    /// Application state configured at bootstrap.
    pub app_state: &'a Extensions,
}

impl fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext")
            .field("registry", &self.registry)
            .field("app_state", &self.app_state)
            .finish_non_exhaustive()
    }
}

/// One top-level command.
///
/// Runnables are registered once at startup and invoked through `&self`; the
/// CLI is single-threaded and a runnable that needs mutable state should keep
/// it behind a `Cell`/`RefCell`.
pub trait Runnable {
    /// The command id this runnable answers to. Must not change.
    fn id(&self) -> &str;

    /// Declared sub-commands and their arities.
    fn commands(&self) -> SubcommandTable;

    /// Executes the command.
    ///
    /// `args` is the argument vector with the command id removed, so
    /// `args[0]` is the sub-command name when one was given. `total` is the
    /// length of the original argument vector.
    fn run(&self, args: &[String], total: usize, ctx: &CommandContext<'_>) -> anyhow::Result<()>;

    /// Name of the implementing type, shown by help listings.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
