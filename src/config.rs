use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{BarrierClass, ElementKind};

/// Settings for one placement run.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Element kinds to process, in order.
    pub kinds: Vec<ElementKind>,
    /// Barrier class rays are cast against.
    pub barrier_class: BarrierClass,
    /// Family name of the opening template to instantiate.
    pub template_family: String,
    /// Substring identifying the source model by title.
    pub source_model_suffix: String,
    /// Process elements on the rayon thread pool.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kinds: vec![ElementKind::Duct, ElementKind::Pipe],
            barrier_class: BarrierClass::Wall,
            template_family: "Opening".to_owned(),
            source_model_suffix: "HVAC".to_owned(),
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names no element kinds
    /// or an empty template family.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for settings that make a run meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kinds.is_empty() {
            return Err(ConfigError::Invalid("no element kinds selected".to_owned()));
        }
        if self.template_family.trim().is_empty() {
            return Err(ConfigError::Invalid("template family is empty".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.kinds, vec![ElementKind::Duct, ElementKind::Pipe]);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config =
            EngineConfig::from_json(r#"{"kinds": ["pipe"], "parallel": true, "template_family": "Sleeve"}"#)
                .unwrap();
        assert_eq!(config.kinds, vec![ElementKind::Pipe]);
        assert!(config.parallel);
        assert_eq!(config.template_family, "Sleeve");
        assert_eq!(config.source_model_suffix, "HVAC");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            EngineConfig::from_json("{kinds"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(EngineConfig::from_json(r#"{"kinds": ["cable_tray"]}"#).is_err());
    }

    #[test]
    fn empty_kind_list_is_invalid() {
        assert!(matches!(
            EngineConfig::from_json(r#"{"kinds": []}"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
