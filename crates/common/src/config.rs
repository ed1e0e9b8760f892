//! Translator configuration loading from YAML files

use crate::{Result, TranslatorError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default limit on nested type translation
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for one translation run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Deepest nesting of objects/arrays translated before the node is
    /// reported as an error
    pub max_depth: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TranslatorError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            TranslatorError::Yaml(e) => TranslatorError::Config(format!(
                "Failed to parse config YAML from {:?}: {}",
                path, e
            )),
            other => other,
        })
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: TranslatorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(TranslatorError::Config(
                "max_depth must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
