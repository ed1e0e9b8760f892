//! Common types and utilities for the Swagger type model translator
//!
//! This crate contains the output data model (property types, schemas,
//! methods), the error type and the translator configuration shared by the
//! parser and CLI components.

mod config;
mod method;
mod model;

pub use config::{TranslatorConfig, DEFAULT_MAX_DEPTH};
pub use method::{BodySchema, HttpMethod, Method, Paths};
pub use model::{BasicType, ObjectProperty, PropertyType, Schema};

use thiserror::Error;

/// Errors that can occur while loading documents or configuration
///
/// Translation itself never fails; malformed schema content is reported
/// through the translation context instead.
#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslatorError::Parse("unexpected token".to_string());
        assert_eq!(err.to_string(), "Parse error: unexpected token");

        let err = TranslatorError::Config("max_depth must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: max_depth must be positive"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TranslatorError = json_err.into();
        assert!(matches!(err, TranslatorError::Json(_)));
    }
}
