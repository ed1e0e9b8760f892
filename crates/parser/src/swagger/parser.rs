//! Swagger document loader

use super::types::SwaggerDocument;
use crate::{translate_document, Translation};
use std::fs;
use std::path::Path;
use swagger_type_model_common::{Result, TranslatorConfig, TranslatorError};

/// Serialization format of a document on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn detect(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Swagger document parser
///
/// Reads a JSON or YAML document into the tree consumed by the translator.
pub struct SwaggerParser {
    document: SwaggerDocument,
}

impl SwaggerParser {
    /// Load a document from a file, choosing the format by extension
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SwaggerParser::from_file("api.yaml")?;
    /// let translation = parser.translate(&TranslatorConfig::default());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = DocumentFormat::detect(path.as_ref());
        Self::from_file_with_format(path, format)
    }

    /// Load a document from a file in an explicit format
    pub fn from_file_with_format<P: AsRef<Path>>(path: P, format: DocumentFormat) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TranslatorError::Parse(format!(
                "Failed to read Swagger file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        match format {
            DocumentFormat::Json => Self::from_json(&content),
            DocumentFormat::Yaml => Self::from_yaml(&content),
        }
    }

    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let document: SwaggerDocument = serde_json::from_str(json)
            .map_err(|e| TranslatorError::Parse(format!("Failed to parse Swagger JSON: {}", e)))?;
        Ok(Self { document })
    }

    /// Parse a document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let document: SwaggerDocument = serde_yaml::from_str(yaml)
            .map_err(|e| TranslatorError::Parse(format!("Failed to parse Swagger YAML: {}", e)))?;
        Ok(Self { document })
    }

    /// Translate the loaded document
    pub fn translate(&self, config: &TranslatorConfig) -> Translation {
        translate_document(&self.document, config)
    }

    /// Get reference to the underlying document
    pub fn document(&self) -> &SwaggerDocument {
        &self.document
    }

    pub fn into_document(self) -> SwaggerDocument {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_json() {
        let json = r#"{
            "openapi": "3.0.0",
            "paths": {}
        }"#;

        let parser = SwaggerParser::from_json(json).unwrap();
        assert_eq!(parser.document().openapi.as_deref(), Some("3.0.0"));
        assert!(parser.document().paths.is_empty());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
openapi: 3.0.0
paths:
  /folders:
    get:
      tags: [Folder]
components:
  schemas:
    Folder:
      type: object
      properties:
        id:
          type: string
          format: uuid
"#;

        let parser = SwaggerParser::from_yaml(yaml).unwrap();
        let document = parser.document();
        assert!(document.paths["/folders"].get.is_some());
        let schemas = &document.components.as_ref().unwrap().schemas;
        assert!(schemas["Folder"].has_properties());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = SwaggerParser::from_json("{ not json").err().unwrap();
        assert!(matches!(err, TranslatorError::Parse(_)));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(DocumentFormat::detect(Path::new("api.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::detect(Path::new("api.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::detect(Path::new("api.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::detect(Path::new("api")), DocumentFormat::Json);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "paths: {{}}").unwrap();

        let parser = SwaggerParser::from_file(file.path()).unwrap();
        assert!(parser.document().paths.is_empty());
    }
}
