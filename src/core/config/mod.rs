//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. The config file passed to [`Config::load`]
//!
//! Locating the file is the caller's job.
//!
//! # Example
//!
//! ```
//! use assetgen::core::config::Config;
//!
//! let result = Config::from_toml_str("prefix = \"R.assets\"\naccessors = false").unwrap();
//! let config = result.config;
//!
//! assert_eq!(config.prefix().to_string(), "R.assets");
//! assert!(!config.accessors());
//! assert_eq!(config.kinds().len(), 3);
//! ```

pub mod schema;

pub use schema::{DiagnosticsMode, GeneratorConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::naming::QualifiedIdentifier;
use crate::core::types::ResourceKind;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "R";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}: {message}")]
    ParseError { origin: String, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The file that triggered the warning, if any.
    pub path: Option<PathBuf>,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Validated configuration with defaults applied by accessors.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw configuration as parsed
    pub generator: GeneratorConfig,
    prefix: QualifiedIdentifier,
    /// Path to the config file (if loaded from disk)
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            prefix: default_prefix(),
            path: None,
        }
    }
}

fn default_prefix() -> QualifiedIdentifier {
    QualifiedIdentifier::parse(DEFAULT_PREFIX).unwrap_or_default()
}

impl Config {
    /// Load configuration from `path`, or defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let Some(path) = path else {
            return Ok(ConfigLoadResult {
                config: Config::default(),
                warnings: Vec::new(),
            });
        };

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let generator: GeneratorConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                origin: format!("file '{}'", path.display()),
                message: e.to_string(),
            })?;

        let mut result = Self::from_generator(generator, Some(path.to_path_buf()))?;
        for warning in &mut result.warnings {
            warning.path = Some(path.to_path_buf());
        }
        Ok(result)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or validated.
    pub fn from_toml_str(contents: &str) -> Result<ConfigLoadResult, ConfigError> {
        let generator: GeneratorConfig =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError {
                origin: "text".to_string(),
                message: e.to_string(),
            })?;
        Self::from_generator(generator, None)
    }

    /// Validate an already-built [`GeneratorConfig`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if validation fails.
    pub fn from_generator(
        generator: GeneratorConfig,
        path: Option<PathBuf>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        generator.validate()?;

        let prefix = match &generator.prefix {
            Some(prefix) => QualifiedIdentifier::parse(prefix)
                .map_err(|e| ConfigError::InvalidValue(format!("invalid prefix: {}", e)))?,
            None => default_prefix(),
        };

        let mut warnings = Vec::new();
        if generator.kinds.as_ref().is_some_and(|k| k.is_empty()) {
            warnings.push(ConfigWarning {
                message: "no resource kinds selected; nothing will be generated".to_string(),
                path: None,
            });
        }

        Ok(ConfigLoadResult {
            config: Config {
                generator,
                prefix,
                path,
            },
            warnings,
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Qualified root for generated groups.
    ///
    /// Defaults to `R`.
    pub fn prefix(&self) -> &QualifiedIdentifier {
        &self.prefix
    }

    /// Resource kinds to generate, in order.
    ///
    /// Defaults to every kind.
    pub fn kinds(&self) -> Vec<ResourceKind> {
        self.generator
            .kinds
            .clone()
            .unwrap_or_else(|| ResourceKind::ALL.to_vec())
    }

    /// Whether child groups get accessor entry points.
    ///
    /// Defaults to `true`.
    pub fn accessors(&self) -> bool {
        self.generator.accessors.unwrap_or(true)
    }

    /// Where diagnostics go.
    ///
    /// Defaults to console.
    pub fn diagnostics(&self) -> DiagnosticsMode {
        self.generator.diagnostics.unwrap_or_default()
    }

    /// Path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_none_uses_defaults() {
        let result = Config::load(None).unwrap();
        let config = result.config;

        assert_eq!(config.prefix().to_string(), "R");
        assert_eq!(config.kinds(), ResourceKind::ALL.to_vec());
        assert!(config.accessors());
        assert_eq!(config.diagnostics(), DiagnosticsMode::Console);
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("assetgen.toml");

        fs::write(
            &config_path,
            r#"
            prefix = "Assets"
            kinds = ["image"]
            diagnostics = "quiet"
            "#,
        )
        .unwrap();

        let result = Config::load(Some(&config_path)).unwrap();
        let config = result.config;

        assert_eq!(config.prefix().to_string(), "Assets");
        assert_eq!(config.kinds(), vec![ResourceKind::Image]);
        assert_eq!(config.diagnostics(), DiagnosticsMode::Quiet);
        assert_eq!(config.loaded_from(), Some(config_path.as_path()));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(&temp.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn empty_kinds_warns() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("assetgen.toml");
        fs::write(&config_path, "kinds = []").unwrap();

        let result = Config::load(Some(&config_path)).unwrap();
        assert!(result.config.kinds().is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path.as_deref(), Some(config_path.as_path()));
    }

    #[test]
    fn invalid_prefix_rejected() {
        let result = Config::from_toml_str("prefix = \"1st\"");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result = Config::from_toml_str("prefix = \"R\"\nunknown_field = true");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn unknown_kind_rejected() {
        let result = Config::from_toml_str("kinds = [\"font\"]");
        assert!(result.is_err());
    }
}
