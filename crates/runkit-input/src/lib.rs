//! Line-oriented input for runkit command-line tools.
//!
//! `runkit-input` covers the reading half of a runkit CLI's terminal I/O:
//! blocking line reads from stdin, simple text prompts built on top of them,
//! and access to environment variables. Every OS interaction sits behind a
//! trait so handlers can be exercised with scripted doubles.
//!
//! # Quick Start
//!
//! ```ignore
//! use runkit_input::{RealTerminal, TextPrompt};
//!
//! let terminal = RealTerminal;
//! let name = TextPrompt::new("Runnable name: ").ask(&terminal)?;
//! let dir = TextPrompt::new("Output directory: ").optional().ask(&terminal)?;
//! ```
//!
//! # Testing
//!
//! ```
//! use runkit_input::{MockTerminal, TextPrompt};
//!
//! let terminal = MockTerminal::with_responses(["Deploy"]);
//! let answer = TextPrompt::new("Name: ").ask(&terminal).unwrap();
//! assert_eq!(answer.as_deref(), Some("Deploy"));
//! assert_eq!(terminal.prompts(), vec!["Name: ".to_string()]);
//! ```

pub mod env;
mod error;
mod prompt;
mod terminal;

pub use env::{EnvReader, MockEnv, RealEnv};
pub use error::InputError;
pub use prompt::TextPrompt;
pub use terminal::{MockTerminal, RealTerminal, TerminalIO};
