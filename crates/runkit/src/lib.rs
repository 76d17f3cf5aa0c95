//! # runkit
//!
//! A command-line skeleton built from runnables. Each runnable owns one
//! top-level command id and declares its sub-commands with their arities;
//! the dispatcher validates every call against that declaration before the
//! runnable runs.
//!
//! This crate is the application layer over [`runkit_dispatch`]:
//!
//! - [`App`]: bootstrap with the built-in [`Help`] runnable and the loaded
//!   [`Config`]
//! - [`Help`]: usage text, `list-runnables`, `list-runnable-commands <id>`
//!   and `create-runnable`
//! - [`scaffold`]: generates new runnable source files from a marker
//!   template
//! - [`Config`]: optional TOML configuration (output directory, template
//!   override, interface colours)
//! - [`Environment`]: refuses to run under a web server gateway
//!
//! ## Quick Start
//!
//! ```rust
//! use runkit::{App, Config};
//! use runkit_dispatch::{Arity, CommandContext, LineStyle, MemorySink, Runnable, SubcommandTable};
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
//!         SubcommandTable::new().with("show", Arity::Exact(1))
//!     }
//!
//!     fn run(&self, args: &[String], _total: usize, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
//!         ctx.output.write_line(&format!("route {}", args[1]), LineStyle::plain())?;
//!         Ok(())
//!     }
//! }
//!
//! let app = App::bootstrap(Config::default()).unwrap().with_runnable(Route);
//! let sink = MemorySink::new();
//! let terminal = MockTerminal::eof();
//!
//! assert_eq!(app.run(["route", "show", "/home"], &sink, &terminal), 0);
//! assert_eq!(sink.stdout(), vec!["route /home"]);
//!
//! // Wrong argument count: reported on stderr, usage exit status.
//! assert_eq!(app.run(["route", "show"], &sink, &terminal), 2);
//! ```

mod app;
pub mod cli;
pub mod config;
pub mod environment;
mod help;
pub mod logging;
pub mod scaffold;
pub mod style;

pub use app::{report, App, FALLBACK_ERROR_STYLE};
pub use config::{Config, ConfigError};
pub use environment::{Environment, EnvironmentError};
pub use help::{Help, CREATE_RUNNABLE, LIST_RUNNABLES, LIST_RUNNABLE_COMMANDS, PROGRAM};
pub use scaffold::{GenerationError, Generator, RunnableSpec};

pub use runkit_dispatch;
pub use runkit_input;
