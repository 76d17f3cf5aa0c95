//! Configuration loading.
//!
//! runkit reads a single optional TOML file. Lookup order:
//!
//! 1. an explicit path (the `--config` flag)
//! 2. the `RUNKIT_CONFIG` environment variable
//! 3. `<config dir>/runkit/config.toml`
//!
//! A missing file found by discovery means "use defaults". A missing file
//! that was asked for explicitly is an error.
//!
//! ```toml
//! runnables_path = "src/commands"
//! template_path = "templates/runnable.rs.phx"
//!
//! [interface.error]
//! text_color = "white"
//! text_background = "red"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use runkit_dispatch::{Color, LineStyle};
use runkit_input::EnvReader;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::style;

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "RUNKIT_CONFIG";

/// Errors from loading or reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Option [{key}] has the wrong type: {message}")]
    WrongType { key: String, message: String },

    #[error("Option [{key}]: {message}")]
    InvalidColor { key: String, message: String },
}

/// Colour names for one `interface.<kind>` section.
#[derive(Debug, Default, Deserialize)]
struct LineColors {
    text_color: Option<String>,
    text_background: Option<String>,
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: toml::Table,
    source: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let values = toml::from_str(text).map_err(|source| ConfigError::Parse {
            origin: "<string>".to_string(),
            source,
        })?;
        Ok(Self {
            values,
            source: None,
        })
    }

    /// Loads the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let values = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            values,
            source: Some(path.to_path_buf()),
        })
    }

    /// Finds and loads the configuration file.
    pub fn discover(explicit: Option<&Path>, env: &dyn EnvReader) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(val) = env.var(CONFIG_ENV).filter(|v| !v.is_empty()) {
            debug!(path = %val, "Using {}", CONFIG_ENV);
            return Self::load(Path::new(&val));
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/runkit/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("runkit").join(CONFIG_FILE))
    }

    /// The file this configuration was read from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Looks up a dotted key such as `interface.error.text_color`.
    pub fn get_option(&self, key: &str) -> Option<&toml::Value> {
        let mut parts = key.split('.');
        let mut value = self.values.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        Some(value)
    }

    /// Looks up a string option, failing when the key holds something else.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.get_option(key) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(ConfigError::WrongType {
                key: key.to_string(),
                message: format!("expected a string, found {}", other.type_str()),
            }),
        }
    }

    /// Default output directory for generated runnables.
    pub fn runnables_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self
            .get_str("runnables_path")?
            .filter(|p| !p.is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from))
    }

    /// Template file overriding the embedded runnable template.
    pub fn template_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        Ok(self
            .get_str("template_path")?
            .filter(|p| !p.is_empty())
            .map(PathBuf::from))
    }

    /// Style for error diagnostics. Defaults to red text.
    pub fn error_style(&self) -> Result<LineStyle, ConfigError> {
        self.interface_style("error", LineStyle::fg(Color::Red))
    }

    /// Style for informational output. Defaults to green text.
    pub fn info_style(&self) -> Result<LineStyle, ConfigError> {
        self.interface_style("info", LineStyle::fg(Color::Green))
    }

    fn interface_style(&self, kind: &str, default: LineStyle) -> Result<LineStyle, ConfigError> {
        let key = format!("interface.{}", kind);
        let colors: LineColors = match self.get_option(&key) {
            None => return Ok(default),
            Some(value) => value
                .clone()
                .try_into()
                .map_err(|err: toml::de::Error| ConfigError::WrongType {
                    key: key.clone(),
                    message: err.message().to_string(),
                })?,
        };

        let mut line = default;
        if let Some(name) = colors.text_color.as_deref() {
            line.fg = style::parse_color(name).map_err(|message| ConfigError::InvalidColor {
                key: format!("{}.text_color", key),
                message,
            })?;
        }
        if let Some(name) = colors.text_background.as_deref() {
            line.bg = style::parse_color(name).map_err(|message| ConfigError::InvalidColor {
                key: format!("{}.text_background", key),
                message,
            })?;
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runkit_input::MockEnv;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.runnables_path().unwrap(), PathBuf::from("."));
        assert_eq!(config.template_path().unwrap(), None);
        assert_eq!(config.error_style().unwrap(), LineStyle::fg(Color::Red));
        assert_eq!(config.info_style().unwrap(), LineStyle::fg(Color::Green));
        assert!(config.source().is_none());
    }

    #[test]
    fn dotted_lookup() {
        let config = Config::from_toml_str(
            r#"
            runnables_path = "src/commands"

            [interface.error]
            text_color = "white"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.get_option("interface.error.text_color"),
            Some(&toml::Value::String("white".into()))
        );
        assert_eq!(config.get_option("interface.error.missing"), None);
        assert_eq!(config.get_option("runnables_path.deeper"), None);
        assert_eq!(
            config.runnables_path().unwrap(),
            PathBuf::from("src/commands")
        );
    }

    #[test]
    fn interface_colors_override_defaults() {
        let config = Config::from_toml_str(
            r#"
            [interface.error]
            text_color = "white"
            text_background = "red"

            [interface.info]
            text_background = "bright_black"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.error_style().unwrap(),
            LineStyle::fg(Color::White).on(Color::Red)
        );
        assert_eq!(
            config.info_style().unwrap(),
            LineStyle::fg(Color::Green).on(Color::Color256(8))
        );
    }

    #[test]
    fn unknown_color_is_an_error() {
        let config = Config::from_toml_str("[interface.error]\ntext_color = \"mauve\"").unwrap();
        let err = config.error_style().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { ref key, .. } if key == "interface.error.text_color"));
    }

    #[test]
    fn wrong_type_is_an_error() {
        let config = Config::from_toml_str("runnables_path = 3").unwrap();
        assert!(matches!(
            config.runnables_path(),
            Err(ConfigError::WrongType { .. })
        ));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        assert!(matches!(
            Config::from_toml_str("runnables_path = "),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::discover(Some(&missing), &MockEnv::new()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(path) if path == missing));
    }

    #[test]
    fn explicit_path_wins_over_env() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let from_env = dir.path().join("env.toml");
        fs::write(&explicit, "runnables_path = \"explicit\"").unwrap();
        fs::write(&from_env, "runnables_path = \"env\"").unwrap();

        let env = MockEnv::new().with_var(CONFIG_ENV, from_env.to_string_lossy());
        let config = Config::discover(Some(&explicit), &env).unwrap();
        assert_eq!(config.runnables_path().unwrap(), PathBuf::from("explicit"));
        assert_eq!(config.source(), Some(explicit.as_path()));
    }

    #[test]
    fn env_variable_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("runkit.toml");
        fs::write(&path, "template_path = \"custom.phx\"").unwrap();

        let env = MockEnv::new().with_var(CONFIG_ENV, path.to_string_lossy());
        let config = Config::discover(None, &env).unwrap();
        assert_eq!(
            config.template_path().unwrap(),
            Some(PathBuf::from("custom.phx"))
        );
    }
}
