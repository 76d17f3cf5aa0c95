//! The `runkit` command line.
//!
//! clap only handles the global flags. Everything from the first positional
//! argument on is passed to the dispatcher untouched.

use std::path::PathBuf;

use clap::Parser;
use runkit_dispatch::{ColorChoice, OutputSink, TermSink};
use runkit_input::{EnvReader, RealEnv, RealTerminal, TerminalIO};

use crate::app::{report, App, FALLBACK_ERROR_STYLE};
use crate::config::Config;
use crate::environment::Environment;
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "runkit",
    version,
    about = "Dispatches to registered runnables and scaffolds new ones",
    after_help = "Run `runkit help` for the list of runnables and help sub-commands."
)]
pub struct Cli {
    /// Configuration file (default: $RUNKIT_CONFIG, then the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Log dispatch decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// <command id> [sub-command] [...arguments]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        }
    }
}

/// Runs one invocation and returns the process exit status.
///
/// The environment check and configuration errors are fatal (status 1)
/// and happen before anything is dispatched.
pub fn run(
    cli: Cli,
    env: &dyn EnvReader,
    output: &dyn OutputSink,
    terminal: &dyn TerminalIO,
) -> u8 {
    if let Err(err) = Environment::validate(env) {
        report(output, FALLBACK_ERROR_STYLE, &err);
        return 1;
    }

    let app = match Config::discover(cli.config.as_deref(), env).and_then(App::bootstrap) {
        Ok(app) => app,
        Err(err) => {
            report(output, FALLBACK_ERROR_STYLE, &err);
            return 1;
        }
    };

    app.run(cli.args, output, terminal)
}

/// Entry point for the `runkit` binary.
pub fn main() -> u8 {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let output = TermSink::new(cli.color_choice());
    run(cli, &RealEnv, &output, &RealTerminal)
}
