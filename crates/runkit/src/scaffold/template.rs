//! Marker templates for generated runnables.
//!
//! A template is plain text with five required markers. Each one is replaced
//! exactly once per occurrence, in a single pass, so substituted values are
//! never scanned for further markers.

use std::fmt;
use std::io;
use std::path::Path;

use tracing::debug;

use super::error::GenerationError;

/// The runnable template compiled into the binary.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/runnable.rs.phx");

const MARKER_PREFIX: &str = "[phx:";

/// A placeholder in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Source-file prologue.
    Lang,
    /// Runnable type name.
    Name,
    /// Command id literal.
    Id,
    /// Sub-command table literal.
    Commands,
    /// Module path line.
    Namespace,
}

impl Marker {
    pub const ALL: [Marker; 5] = [
        Marker::Lang,
        Marker::Name,
        Marker::Id,
        Marker::Commands,
        Marker::Namespace,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Marker::Lang => "[phx:lang]",
            Marker::Name => "[phx:name]",
            Marker::Id => "[phx:id]",
            Marker::Commands => "[phx:commands]",
            Marker::Namespace => "[phx:namespace]",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Replacement text for every marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    pub lang: String,
    pub name: String,
    pub id: String,
    pub commands: String,
    pub namespace: String,
}

impl Substitutions {
    fn value(&self, marker: Marker) -> &str {
        match marker {
            Marker::Lang => &self.lang,
            Marker::Name => &self.name,
            Marker::Id => &self.id,
            Marker::Commands => &self.commands,
            Marker::Namespace => &self.namespace,
        }
    }
}

/// Template text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    origin: String,
    source: String,
}

impl Template {
    pub fn new(origin: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            source: source.into(),
        }
    }

    /// The built-in template.
    pub fn embedded() -> Self {
        Self::new("<embedded>", DEFAULT_TEMPLATE)
    }

    /// Reads a template file.
    pub fn load(path: &Path) -> Result<Self, GenerationError> {
        let source = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                GenerationError::TemplateMissing(path.to_path_buf())
            } else {
                GenerationError::TemplateUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        debug!(path = %path.display(), "loaded template");
        Ok(Self::new(path.display().to_string(), source))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Markers that do not appear anywhere in the template.
    pub fn missing_markers(&self) -> Vec<Marker> {
        Marker::ALL
            .into_iter()
            .filter(|m| !self.source.contains(m.token()))
            .collect()
    }

    /// Fails unless every marker is present.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let missing = self.missing_markers();
        if missing.is_empty() {
            return Ok(());
        }
        Err(GenerationError::InvalidTemplate {
            origin: self.origin.clone(),
            missing: missing.into_iter().map(Marker::token).collect(),
        })
    }

    /// Validates the template, then replaces every marker.
    pub fn render(&self, values: &Substitutions) -> Result<String, GenerationError> {
        self.validate()?;

        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();
        while let Some(start) = rest.find(MARKER_PREFIX) {
            out.push_str(&rest[..start]);
            rest = &rest[start..];
            match Marker::ALL.into_iter().find(|m| rest.starts_with(m.token())) {
                Some(marker) => {
                    out.push_str(values.value(marker));
                    rest = &rest[marker.token().len()..];
                }
                None => {
                    out.push_str(MARKER_PREFIX);
                    rest = &rest[MARKER_PREFIX.len()..];
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}
