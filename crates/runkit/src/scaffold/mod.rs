//! Runnable scaffolding.
//!
//! `help create-runnable` turns a [`RunnableSpec`] into a Rust source file:
//! the template is loaded and checked for all five markers, the sub-command
//! shorthand is parsed, the markers are substituted and the result is
//! written to `<dir>/<Name>.rs`.

pub mod dsl;
mod error;
mod generator;
pub mod template;

pub use error::GenerationError;
pub use generator::{Generator, RunnableSpec, LANG_PROLOGUE, SOURCE_EXTENSION};
pub use template::{Marker, Substitutions, Template, DEFAULT_TEMPLATE};
