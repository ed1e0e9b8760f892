//! Operation to `Method` translation
//!
//! Every operation yields a complete [`Method`]. Missing routing metadata or
//! bodies are diagnosed, replaced by placeholders and flagged on the context.

use crate::context::{DiagnosticKind, TranslationContext};
use crate::naming::body_schema_name;
use crate::schema_factory::{SchemaFactory, SchemaTranslator};
use crate::swagger::{
    media_entry, MediaType, ResponseCode, SwaggerMethod, SwaggerPath, SwaggerSchemaProperty,
};
use indexmap::IndexMap;
use swagger_type_model_common::{HttpMethod, Method, Paths};

/// Tag used when an operation declares none
pub const NO_TAGS: &str = "NoTags";

/// Name used when an operation has no `x-metadata.method`
pub const NO_METHOD: &str = "NoMethod";

/// Builds `Method` records, delegating body schemas to a [`SchemaTranslator`]
pub struct PathProcessor<S = SchemaFactory> {
    schema_factory: S,
}

impl<S: SchemaTranslator> PathProcessor<S> {
    pub fn new(schema_factory: S) -> Self {
        Self { schema_factory }
    }

    pub fn schema_factory(&self) -> &S {
        &self.schema_factory
    }

    pub fn into_schema_factory(self) -> S {
        self.schema_factory
    }

    /// Translate one operation
    ///
    /// Request and response bodies are both translated under
    /// `<Tag><Name>Request`. Only `application/json` content is read.
    pub fn translate_path(
        &mut self,
        url: &str,
        http_method: HttpMethod,
        operation: &SwaggerMethod,
        ctx: &mut TranslationContext,
    ) -> Method {
        let tag = match operation.primary_tag() {
            Some(tag) => tag.to_string(),
            None => {
                ctx.report(
                    DiagnosticKind::MissingRouting,
                    format!("Method {} {} has no tags", http_method, url),
                );
                NO_TAGS.to_string()
            }
        };

        let name = match operation.method_name() {
            Some(name) => name.to_string(),
            None => {
                ctx.report(
                    DiagnosticKind::MissingRouting,
                    format!("Method {} {} has no x-metadata.method", http_method, url),
                );
                NO_METHOD.to_string()
            }
        };

        let schema_name = body_schema_name(&tag, &name);

        let request = match request_schema(operation) {
            Some(node) => Some(self.schema_factory.translate_body(&schema_name, node, ctx)),
            None => {
                ctx.report(
                    DiagnosticKind::MissingBody,
                    format!("Method {} {} has no request body schema", http_method, url),
                );
                None
            }
        };

        let response = match response_schema(operation) {
            Some(node) => Some(self.schema_factory.translate_body(&schema_name, node, ctx)),
            None => {
                ctx.report(
                    DiagnosticKind::MissingBody,
                    format!("Method {} {} has no 200 response schema", http_method, url),
                );
                None
            }
        };

        Method {
            name,
            tag,
            url: url.to_string(),
            http_method,
            description: operation.description.clone().unwrap_or_default(),
            summary: operation.summary.clone().unwrap_or_default(),
            request,
            response,
        }
    }

    /// Translate every operation and group the methods by tag
    pub fn translate_paths(
        &mut self,
        paths: &IndexMap<String, SwaggerPath>,
        ctx: &mut TranslationContext,
    ) -> Paths {
        let mut grouped = Paths::new();

        for (url, path) in paths {
            for (http_method, operation) in path.operations() {
                let method = self.translate_path(url, http_method, operation, ctx);
                grouped.entry(method.tag.clone()).or_default().push(method);
            }
        }

        grouped
    }
}

/// `requestBody.content["application/json"].schema`
fn request_schema(operation: &SwaggerMethod) -> Option<&SwaggerSchemaProperty> {
    let content = operation.request_body.as_ref()?.content.as_ref()?;
    media_entry(content, MediaType::Json)?.schema.as_ref()
}

/// `responses["200"].content["application/json"].schema`
fn response_schema(operation: &SwaggerMethod) -> Option<&SwaggerSchemaProperty> {
    let content = operation.response(ResponseCode::OK)?.content.as_ref()?;
    media_entry(content, MediaType::Json)?.schema.as_ref()
}

impl PathProcessor<SchemaFactory> {
    /// Processor backed by a default schema factory
    pub fn with_default_factory() -> Self {
        Self::new(SchemaFactory::default())
    }
}

impl Default for PathProcessor<SchemaFactory> {
    fn default() -> Self {
        Self::with_default_factory()
    }
}
