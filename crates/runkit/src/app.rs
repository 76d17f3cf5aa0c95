//! Bootstrap and top-level error reporting.

use std::fmt;

use runkit_dispatch::{
    Color, DispatchError, Dispatcher, Extensions, LineStyle, OutputSink, Registry, Runnable,
};
use runkit_input::TerminalIO;
use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::help::Help;

/// Style for diagnostics printed before configuration is available.
pub const FALLBACK_ERROR_STYLE: LineStyle = LineStyle::fg(Color::Red);

/// Writes `Error: <message>` to stderr.
///
/// A sink that cannot write has nowhere left to report to, so write
/// failures are dropped.
pub fn report(output: &dyn OutputSink, style: LineStyle, message: &dyn fmt::Display) {
    let _ = output.error_line(&format!("Error: {}", message), style);
}

/// A bootstrapped runkit application: the built-in runnables, the loaded
/// configuration and a dispatcher over them.
#[derive(Debug)]
pub struct App {
    dispatcher: Dispatcher,
    error_style: LineStyle,
}

impl App {
    /// Registers [`Help`] and makes `config` available to every runnable.
    ///
    /// Fails when the configured interface colours are invalid.
    pub fn bootstrap(config: Config) -> Result<Self, ConfigError> {
        let error_style = config.error_style()?;
        config.info_style()?;

        let mut registry = Registry::new();
        registry.register(Help);

        let mut app_state = Extensions::new();
        app_state.insert(config);

        debug!(runnables = registry.len(), "bootstrapped");
        Ok(Self {
            dispatcher: Dispatcher::new(registry).with_app_state(app_state),
            error_style,
        })
    }

    /// Registers an additional runnable. A runnable with the same id as an
    /// existing one replaces it.
    pub fn register<R: Runnable + 'static>(&mut self, runnable: R) -> &mut Self {
        self.dispatcher.registry_mut().register(runnable);
        self
    }

    pub fn with_runnable<R: Runnable + 'static>(mut self, runnable: R) -> Self {
        self.register(runnable);
        self
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn registry(&self) -> &Registry {
        self.dispatcher.registry()
    }

    pub fn error_style(&self) -> LineStyle {
        self.error_style
    }

    /// Dispatches `argv` without reporting errors.
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
        self.dispatcher.dispatch(argv, output, terminal)
    }

    /// Dispatches `argv`, reports any error and returns the exit status.
    pub fn run<I, S>(&self, argv: I, output: &dyn OutputSink, terminal: &dyn TerminalIO) -> u8
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.dispatch(argv, output, terminal) {
            Ok(()) => 0,
            Err(err) => {
                debug!(error = ?err, "dispatch failed");
                report(output, self.error_style, &err);
                err.exit_code()
            }
        }
    }
}
