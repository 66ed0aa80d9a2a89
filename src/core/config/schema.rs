//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the prefix must be a chain of
//! valid identifiers and resource kinds may not repeat.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::naming::QualifiedIdentifier;
use crate::core::types::ResourceKind;

/// Where generation diagnostics are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    /// `warning: ...` lines on stderr
    #[default]
    Console,
    /// Console lines tagged with the diagnostic code
    Verbose,
    /// `tracing::warn!` events
    Tracing,
    /// Discard
    Quiet,
}

/// Generator configuration.
///
/// # Example
///
/// ```toml
/// prefix = "R"
/// kinds = ["color", "image"]
/// accessors = true
/// diagnostics = "tracing"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Dot-separated qualified root, e.g. `R` or `R.assets`
    pub prefix: Option<String>,

    /// Resource kinds to generate, in order
    pub kinds: Option<Vec<ResourceKind>>,

    /// Emit accessor entry points for child groups
    pub accessors: Option<bool>,

    /// Diagnostic delivery
    pub diagnostics: Option<DiagnosticsMode>,
}

impl GeneratorConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(prefix) = &self.prefix {
            QualifiedIdentifier::parse(prefix)
                .map_err(|e| ConfigError::InvalidValue(format!("invalid prefix: {}", e)))?;
        }

        if let Some(kinds) = &self.kinds {
            for (i, kind) in kinds.iter().enumerate() {
                if kinds[..i].contains(kind) {
                    return Err(ConfigError::InvalidValue(format!(
                        "resource kind '{}' listed more than once",
                        kind
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert!(config.prefix.is_none());
        assert!(config.kinds.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn valid_prefix() {
        let config = GeneratorConfig {
            prefix: Some("R.assets".into()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_prefix() {
        let config = GeneratorConfig {
            prefix: Some("R.my-assets".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn repeated_kind_rejected() {
        let config = GeneratorConfig {
            kinds: Some(vec![ResourceKind::Color, ResourceKind::Color]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrip() {
        let config = GeneratorConfig {
            prefix: Some("R".into()),
            kinds: Some(vec![ResourceKind::Image, ResourceKind::Data]),
            accessors: Some(false),
            diagnostics: Some(DiagnosticsMode::Quiet),
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: GeneratorConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn diagnostics_modes_parse_lowercase() {
        let config: GeneratorConfig = toml::from_str("diagnostics = \"verbose\"").unwrap();
        assert_eq!(config.diagnostics, Some(DiagnosticsMode::Verbose));
        let config: GeneratorConfig = toml::from_str("diagnostics = \"tracing\"").unwrap();
        assert_eq!(config.diagnostics, Some(DiagnosticsMode::Tracing));
        assert!(toml::from_str::<GeneratorConfig>("diagnostics = \"loud\"").is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let result: Result<GeneratorConfig, _> = toml::from_str("prefix = \"R\"\nextra = 1");
        assert!(result.is_err());
    }
}
