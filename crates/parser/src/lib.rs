//! Swagger schema translation
//!
//! This crate translates Swagger/OpenAPI documents, already parsed into the
//! [`swagger`] tree, into the normalized type model of
//! `swagger_type_model_common`.
//!
//! ## Translation Strategy
//!
//! - Property nodes go through the [`TypeFactory`] chain of type processors
//!   (model, link, object, enum, array, basic) and become `PropertyType`s.
//! - Named schemas and request/response bodies are built by the
//!   [`SchemaFactory`].
//! - Operations become `Method` records through the [`PathProcessor`],
//!   grouped by tag.
//!
//! Translation never fails. Defects turn into `Error` leaves or placeholder
//! values and are collected on the [`TranslationContext`]; callers read
//! `has_errors` at the end to decide whether the output can be trusted.

mod context;
mod naming;
mod path_processor;
mod schema_factory;
pub mod swagger;
pub mod type_processors;

pub use context::{Diagnostic, DiagnosticKind, TranslationContext};
pub use naming::{body_schema_name, capitalize};
pub use path_processor::{PathProcessor, NO_METHOD, NO_TAGS};
pub use schema_factory::{SchemaFactory, SchemaTranslator};
pub use swagger::{DocumentFormat, SwaggerDocument, SwaggerParser};
pub use type_processors::{default_type_processors, TypeFactory, TypeProcessor};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swagger_type_model_common::{Paths, Schema, TranslatorConfig};

/// Result of translating one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    /// Every named schema: components, queued models and method bodies
    pub schemas: IndexMap<String, Schema>,

    /// Methods grouped by tag
    pub paths: Paths,

    /// Whether any defect was found
    pub has_errors: bool,

    /// Defects in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate a whole document with a fresh context
///
/// # Arguments
/// * `document` - Parsed Swagger document
/// * `config` - Translator settings (depth limit)
pub fn translate_document(document: &SwaggerDocument, config: &TranslatorConfig) -> Translation {
    let mut ctx = TranslationContext::new();
    let (schemas, paths) = translate_document_with_context(document, config, &mut ctx);

    Translation {
        schemas,
        paths,
        has_errors: ctx.has_errors(),
        diagnostics: ctx.into_diagnostics(),
    }
}

/// Translate a document into an existing context
///
/// Reusing one context across documents aggregates diagnostics for a whole
/// API surface.
pub fn translate_document_with_context(
    document: &SwaggerDocument,
    config: &TranslatorConfig,
    ctx: &mut TranslationContext,
) -> (IndexMap<String, Schema>, Paths) {
    let type_factory = TypeFactory::default().with_max_depth(config.max_depth);
    let mut schema_factory = SchemaFactory::new(type_factory);

    if let Some(components) = &document.components {
        schema_factory.translate_components(&components.schemas, ctx);
    }

    let mut path_processor = PathProcessor::new(schema_factory);
    let paths = path_processor.translate_paths(&document.paths, ctx);

    (path_processor.into_schema_factory().into_schemas(), paths)
}
