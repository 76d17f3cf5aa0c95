//! Runnable registry, arity validation and argument dispatch.
//!
//! `runkit-dispatch` is the engine behind a runkit CLI. Applications register
//! [`Runnable`]s in a [`Registry`], hand it to a [`Dispatcher`], and pass the
//! process arguments to [`Dispatcher::dispatch`].
//!
//! # Features
//!
//! - **Registry**: command id → runnable, last registration wins
//! - **Arity contracts**: each runnable declares a [`SubcommandTable`]; calls
//!   are validated against it before the runnable runs
//! - **Dispatch**: `program <command> [sub-command] [args...]`, with the help
//!   runnable answering empty and `help ...` invocations
//! - **Output sink**: styled line output to stdout/stderr, with an in-memory
//!   sink for tests
//!
//! # Usage
//!
//! ```rust
//! use runkit_dispatch::{
//!     Arity, CommandContext, Dispatcher, DispatchError, LineStyle, MemorySink, Registry,
//!     Runnable, SubcommandTable,
//! };
//! use runkit_input::MockTerminal;
//!
//! struct Route;
//!
//! impl Runnable for Route {
//!     fn id(&self) -> &str {
//!         "route"
//!     }
//!
//!     fn commands(&self) -> SubcommandTable {
//!         SubcommandTable::new().with("list", Arity::NoArgs)
//!     }
//!
//!     fn run(&self, _args: &[String], _total: usize, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
//!         ctx.output.write_line("GET /", LineStyle::plain())?;
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(Route);
//! let dispatcher = Dispatcher::new(registry);
//!
//! let sink = MemorySink::new();
//! let terminal = MockTerminal::eof();
//! dispatcher.dispatch(["route", "list"], &sink, &terminal).unwrap();
//! assert_eq!(sink.stdout(), vec!["GET /"]);
//!
//! let err = dispatcher.dispatch(["route", "list", "extra"], &sink, &terminal);
//! assert!(matches!(err, Err(DispatchError::Arity(_))));
//! ```

mod arity;
mod dispatch;
mod error;
mod handler;
mod output;
mod registry;

pub use arity::{validate, Arity, ArityError, ParseArityError, SubcommandTable};

pub use dispatch::{Dispatcher, Invocation, Resolved, HELP_ID};

pub use error::DispatchError;

pub use handler::{CommandContext, Extensions, Runnable};

pub use output::{CapturedLine, ColorChoice, LineStyle, MemorySink, OutputSink, Stream, TermSink};

pub use registry::Registry;

pub use console::Color;
