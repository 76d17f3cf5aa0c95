use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a runnable could not be generated.
///
/// Every variant aborts the generation request before anything is written,
/// except [`GenerationError::WriteFailed`].
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Template file [{}] does not exist", .0.display())]
    TemplateMissing(PathBuf),

    #[error("Failed to read template [{}]: {source}", .path.display())]
    TemplateUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot build runnable from invalid template [{origin}]: missing {}", .missing.join(", "))]
    InvalidTemplate {
        origin: String,
        missing: Vec<&'static str>,
    },

    #[error("Failed to create runnable. [{0}] is not a valid argument length type.")]
    InvalidArityToken(String),

    #[error("Failed to create runnable. [{0}] is not a `name:arity` entry.")]
    MalformedEntry(String),

    #[error("Failed to create runnable. Sub-command [{0}] is declared more than once.")]
    DuplicateSubcommand(String),

    #[error("[{0}] is not a valid runnable name")]
    InvalidName(String),

    #[error("[{0}] is not a valid command id")]
    InvalidId(String),

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
