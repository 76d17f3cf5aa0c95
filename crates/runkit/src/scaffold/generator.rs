//! Writes new runnable source files.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::dsl;
use super::error::GenerationError;
use super::template::{Substitutions, Template};
use crate::config::{Config, ConfigError};

/// Extension of generated files.
pub const SOURCE_EXTENSION: &str = "rs";

/// Banner written in place of `[phx:lang]`.
pub const LANG_PROLOGUE: &str = "// Generated by `runkit help create-runnable`.";

/// What to generate. Collected from prompts and discarded after writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnableSpec {
    /// Type name, also the file stem.
    pub name: String,
    /// Output directory. Falls back to the configured runnables path.
    pub location: Option<PathBuf>,
    /// Module the file will live in, e.g. `app::commands`.
    pub module_path: Option<String>,
    /// Command id the runnable answers to.
    pub id: String,
    /// Sub-command shorthand, e.g. `create-route:4,list:none`.
    pub commands: String,
}

impl RunnableSpec {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn location(mut self, dir: impl Into<PathBuf>) -> Self {
        self.location = Some(dir.into());
        self
    }

    pub fn module_path(mut self, path: impl Into<String>) -> Self {
        self.module_path = Some(path.into());
        self
    }

    pub fn commands(mut self, dsl: impl Into<String>) -> Self {
        self.commands = dsl.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplateSource {
    Embedded,
    File(PathBuf),
}

/// Renders [`RunnableSpec`]s through a template and writes them out.
#[derive(Debug, Clone)]
pub struct Generator {
    template: TemplateSource,
    default_dir: PathBuf,
}

impl Generator {
    /// Uses the embedded template; files land in `default_dir` unless the
    /// [`RunnableSpec`] names a location.
    pub fn new(default_dir: impl Into<PathBuf>) -> Self {
        Self {
            template: TemplateSource::Embedded,
            default_dir: default_dir.into(),
        }
    }

    /// Reads the template from `path` on every generation instead.
    pub fn with_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = TemplateSource::File(path.into());
        self
    }

    /// Generator honouring `runnables_path` and `template_path`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let generator = Self::new(config.runnables_path()?);
        Ok(match config.template_path()? {
            Some(path) => generator.with_template_file(path),
            None => generator,
        })
    }

    pub fn default_dir(&self) -> &Path {
        &self.default_dir
    }

    pub fn load_template(&self) -> Result<Template, GenerationError> {
        match &self.template {
            TemplateSource::Embedded => Ok(Template::embedded()),
            TemplateSource::File(path) => Template::load(path),
        }
    }

    /// `<dir>/<name>.rs` for `spec`.
    pub fn target_path(&self, spec: &RunnableSpec) -> PathBuf {
        let dir = spec
            .location
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(self.default_dir.as_path());
        dir.join(format!("{}.{}", spec.name, SOURCE_EXTENSION))
    }

    /// Produces the file contents for `spec` without writing anything.
    pub fn render(&self, spec: &RunnableSpec) -> Result<String, GenerationError> {
        let template = self.load_template()?;
        template.validate()?;
        debug!(template = template.origin(), "template ok");

        check_name(&spec.name)?;
        check_id(&spec.id)?;
        let table = dsl::parse(&spec.commands)?;

        let namespace = spec
            .module_path
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|m| format!("//! `{}`", m))
            .unwrap_or_default();

        template.render(&Substitutions {
            lang: LANG_PROLOGUE.to_string(),
            name: spec.name.clone(),
            id: format!("{:?}", spec.id),
            commands: dsl::render(&table),
            namespace,
        })
    }

    /// Renders `spec` and writes it, returning the written path. An existing
    /// file at that path is overwritten.
    pub fn generate(&self, spec: &RunnableSpec) -> Result<PathBuf, GenerationError> {
        let content = self.render(spec)?;
        let path = self.target_path(spec);

        std::fs::write(&path, content).map_err(|source| GenerationError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), id = %spec.id, "runnable generated");
        Ok(path)
    }
}

/// Type names must be Rust identifiers, which also keeps them free of path
/// separators.
fn check_name(name: &str) -> Result<(), GenerationError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
                && name != "_"
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(GenerationError::InvalidName(name.to_string()))
    }
}

fn check_id(id: &str) -> Result<(), GenerationError> {
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return Err(GenerationError::InvalidId(id.to_string()));
    }
    Ok(())
}
